use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shortopt_core::{
    DuplicatePolicy, OptionFile, OptionMeta, OptionSet, OutputFormat, format_options, help_text,
};

#[derive(Debug, Parser)]
#[command(name = "shortopt")]
#[command(about = "Parse short-option command lines against a declared option set")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Track arguments given after `--` and print every option's state.
    Parse(ParseArgs),
    /// Print the help listing of an option set without tracking anything.
    List(ListArgs),
    /// Run the bundled example program on the given arguments.
    #[command(disable_help_flag = true)]
    Demo(DemoArgs),
}

/// Where the option set comes from.
#[derive(Debug, Args)]
struct SetArgs {
    /// Spec string, e.g. "vn:f:h" (replaces the spec of --options).
    #[arg(long)]
    spec: Option<String>,
    /// YAML or JSON option file.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Option metadata as NAME:FORMAT:DESCRIPTION (repeatable).
    #[arg(long, value_parser = parse_describe)]
    describe: Vec<OptionMeta>,
    /// Fail when an option name is defined twice.
    #[arg(long)]
    reject_duplicates: bool,
}

#[derive(Debug, Args)]
struct ParseArgs {
    #[command(flatten)]
    set: SetArgs,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
    /// Arguments to track.
    #[arg(last = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    set: SetArgs,
    /// Output format.
    #[arg(long, default_value = "help")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct DemoArgs {
    /// Arguments for the example program (try -h).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::List(args) => run_list(args),
        Command::Demo(args) => run_demo(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let mut set = build_set(args.set)?;
    set.track_or_exit(&args.args);
    let raw = format_options(&set, args.format).map_err(|e| e.to_string())?;
    print!("{raw}");
    Ok(())
}

fn run_list(args: ListArgs) -> Result<(), String> {
    let set = build_set(args.set)?;
    let raw = format_options(&set, args.format).map_err(|e| e.to_string())?;
    print!("{raw}");
    Ok(())
}

fn build_set(args: SetArgs) -> Result<OptionSet, String> {
    let mut file = match &args.options {
        Some(path) => OptionFile::load(path)
            .map_err(|err| format!("Failed to load '{}': {err}", path.display()))?,
        None => OptionFile::default(),
    };
    if args.spec.is_some() {
        file.spec = args.spec;
    }
    if args.reject_duplicates {
        file.syntax.duplicates = DuplicatePolicy::Reject;
    }
    file.describe.extend(args.describe);
    file.build().map_err(|e| e.to_string())
}

/// Parses `NAME:FORMAT:DESCRIPTION`. Empty parts are left unset.
fn parse_describe(raw: &str) -> Result<OptionMeta, String> {
    let mut chars = raw.chars();
    let name = chars
        .next()
        .ok_or_else(|| "expected NAME:FORMAT:DESCRIPTION".to_string())?;
    let rest = chars.as_str();
    let rest = rest
        .strip_prefix(':')
        .ok_or_else(|| format!("expected ':' after option name in '{raw}'"))?;
    let (format, description) = rest.split_once(':').unwrap_or((rest, ""));

    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    Ok(OptionMeta {
        name,
        format: non_empty(format),
        description: non_empty(description),
    })
}

/// The example program: `vn:f:b:d:h` with one description per option.
/// Scan formats are given where the values are read.
fn demo_set() -> Result<OptionSet, String> {
    let mut set = OptionSet::new();
    let described = [
        ('h', "Show help"),
        ('v', "Verbose mode"),
        ('n', "Number (int)"),
        ('f', "Filename (string)"),
        ('b', "Boolean flag"),
        ('d', "Double value"),
    ];
    set.define("vn:f:b:d:h").map_err(|e| e.to_string())?;
    for (name, description) in described {
        set.describe(name, None, Some(description))
            .map_err(|e| e.to_string())?;
    }
    Ok(set)
}

fn run_demo(args: DemoArgs) -> Result<(), String> {
    let mut set = demo_set()?;
    set.track_or_exit(&args.args);

    if set.is_used('h').is_some() {
        print!("{}", help_text(&set));
        return Ok(());
    }

    println!("=== Parsing Results ===");

    if set.is_used('v').is_some() {
        println!("Verbose mode: ON");
    }
    if let Some(number) = set.scan_value_as::<i32>('n', 0, Some("%d")) {
        println!("Number: {number}");
    }
    if let Some(filename) = set.scan_value_as::<&str>('f', 0, None) {
        println!("Filename: {filename}");
    }
    if let Some(flag) = set.scan_value_as::<bool>('b', 0, Some("%b")) {
        println!("Boolean flag: {flag}");
    }
    if let Some(value) = set.scan_value_as::<f64>('d', 0, Some("%lf")) {
        println!("Double value: {value:.2}");
    }
    if set.is_used('x').is_none() {
        println!("Option -x not used");
    }

    Ok(())
}
