//! Rendering of option sets: help listing, verbose state table and
//! serialized dumps.

use crate::error::Result;
use crate::registry::OptionSet;

const DESC_WIDTH: usize = 20;
const ARG_WIDTH: usize = 10;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
    Help,
}

/// Formats an option set in the requested output format.
pub fn format_options(set: &OptionSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(set.options())?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(set.options())?),
        OutputFormat::Table => Ok(verbose_table(set)),
        OutputFormat::Help => Ok(help_text(set)),
    }
}

/// One line per option in registration order; `*` marks options that take
/// an argument.
///
/// # Examples
///
/// ```
/// use shortopt_core::{OptionSet, help_text};
///
/// let mut set = OptionSet::new();
/// set.define("hf:").unwrap();
/// set.describe('h', None, Some("Show help")).unwrap();
/// set.describe('f', Some("%s"), Some("Filename")).unwrap();
///
/// assert_eq!(help_text(&set), "  -h    Show help\n* -f    Filename\n");
/// ```
pub fn help_text(set: &OptionSet) -> String {
    let marker = set.syntax().option_marker;
    let mut out = String::new();
    for opt in set.options() {
        let star = if opt.takes_argument { '*' } else { ' ' };
        let desc = opt.description.as_deref().unwrap_or("");
        let line = format!("{star} {marker}{}    {desc}", opt.name);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Table of every option's state: description, used, kind and values.
pub fn verbose_table(set: &OptionSet) -> String {
    let marker = set.syntax().option_marker;
    let mut out = String::from("\n");
    out.push_str(&row(&["Option", "Description", "Used", "Type", "Argument"]));
    out.push_str(&row(&["------", "-----------", "----", "----", "--------"]));

    for opt in set.options() {
        let name = format!("{marker}{}", opt.name);
        let desc = truncate(opt.description.as_deref().unwrap_or(""), DESC_WIDTH);
        let used = if opt.is_used() { "yes" } else { "no" };
        let kind = if opt.takes_argument { "with-arg" } else { "flag" };
        let args: Vec<String> = opt
            .values()
            .iter()
            .map(|v| truncate(v, ARG_WIDTH))
            .collect();
        out.push_str(&row(&[&name, &desc, used, kind, &args.join(",")]));
    }
    out
}

fn row(cells: &[&str; 5]) -> String {
    let line = format!(
        "{:<6}  {:<dw$}  {:<6}  {:<10}  {}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        cells[4],
        dw = DESC_WIDTH
    );
    format!("{}\n", line.trim_end())
}

/// Cuts `text` to `width` characters, ending in `...` when shortened.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}
