use shortopt_core::{DuplicatePolicy, Error, OptionFile, OptionSet, ParserSyntax, Value};

/// The option set used by the bundled demo program.
fn demo_set() -> OptionSet {
    let mut set = OptionSet::new();
    set.define("vn:f:b:d:h").unwrap();
    set.describe('h', None, Some("Show help")).unwrap();
    set.describe('v', None, Some("Verbose mode")).unwrap();
    set.describe('n', Some("%d"), Some("Number (int)")).unwrap();
    set.describe('f', Some("%s"), Some("Filename (string)")).unwrap();
    set.describe('b', Some("%b"), Some("Boolean flag")).unwrap();
    set.describe('d', Some("%lf"), Some("Double value")).unwrap();
    set
}

#[test]
fn last_option_is_flag_unless_spec_ends_with_marker() {
    for spec in ["h", "n:h", "vn:f:h", "a b c", "ab:cd", "x: y"] {
        let mut set = OptionSet::new();
        set.define(spec).unwrap();
        assert!(
            !set.options().last().unwrap().takes_argument,
            "spec {spec:?}"
        );
    }
    let mut set = OptionSet::new();
    set.define("vn:f:").unwrap();
    assert!(set.options().last().unwrap().takes_argument);
}

#[test]
fn repeated_options_accumulate_in_order() {
    let mut set = OptionSet::new();
    set.define("t:").unwrap();
    set.describe('t', Some("%s"), None).unwrap();
    set.track(["-t", "1", "-t", "2", "-t", "3"]).unwrap();

    assert_eq!(set.value_count('t'), 3);
    let values: Vec<(usize, &str)> = set.values_of('t').collect();
    assert_eq!(values, vec![(0, "1"), (1, "2"), (2, "3")]);
}

#[test]
fn combined_cluster_with_trailing_argument() {
    let mut set = demo_set();
    set.track(["-vn", "42"]).unwrap();

    assert!(set.is_used('v').is_some());
    assert!(set.is_used('n').is_some());
    assert_eq!(set.scan_value::<i32>('n', 0), Some(42));
}

#[test]
fn attached_and_separated_forms_match() {
    let mut attached = demo_set();
    attached.track(["-fdata.txt"]).unwrap();
    let mut separated = demo_set();
    separated.track(["-f", "data.txt"]).unwrap();

    assert_eq!(attached.scan_value::<&str>('f', 0), Some("data.txt"));
    assert_eq!(
        attached.scan_value::<String>('f', 0),
        separated.scan_value::<String>('f', 0)
    );
}

#[test]
fn unknown_option_is_a_usage_error() {
    for args in [vec!["-x"], vec!["-vx"], vec!["-v", "input", "-hq"]] {
        let mut set = demo_set();
        let err = set.track(&args).unwrap_err();
        assert!(err.is_usage(), "{args:?}");
        assert!(matches!(err, Error::UnknownOption(_)), "{args:?}");
    }
}

#[test]
fn missing_trailing_argument_is_a_usage_error() {
    let mut set = demo_set();
    let err = set.track(["-v", "-n"]).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(
        err.to_string(),
        "option '-n' requires an argument but none was supplied"
    );
}

#[test]
fn boolean_scan_never_fails() {
    let mut set = demo_set();
    let words = ["true", "yes", "1", "on", "True", "no", "0", "enabled"];
    let args: Vec<String> = words.iter().map(|w| format!("-b{w}")).collect();
    set.track(&args).unwrap();

    let scanned: Vec<bool> = set.values_of('b').map(|(_, b)| b).collect();
    assert_eq!(
        scanned,
        vec![true, true, true, true, false, false, false, false]
    );
}

#[test]
fn index_past_length_always_misses() {
    let mut set = demo_set();
    set.track(["-n1", "-fa", "-btrue", "-d2.5"]).unwrap();
    for name in ['n', 'f', 'b', 'd'] {
        let len = set.value_count(name);
        assert_eq!(len, 1);
        assert!(set.scan_value::<Value>(name, 0).is_some());
        assert!(set.scan_value::<Value>(name, len).is_none());
    }
}

#[test]
fn demo_invocations() {
    let mut set = demo_set();
    set.track(["-v", "-n", "42", "-f", "data.txt", "-b", "true", "-d", "3.14"])
        .unwrap();
    assert_eq!(set.scan_value::<i32>('n', 0), Some(42));
    assert_eq!(set.scan_value::<&str>('f', 0), Some("data.txt"));
    assert_eq!(set.scan_value::<bool>('b', 0), Some(true));
    assert_eq!(set.scan_value::<f64>('d', 0), Some(3.14));

    let mut set = demo_set();
    set.track(["-vn", "42", "-fdata.txt", "-b1", "-d2.5"]).unwrap();
    assert_eq!(set.scan_value::<bool>('b', 0), Some(true));
    assert_eq!(set.scan_value::<f64>('d', 0), Some(2.5));

    let mut set = demo_set();
    set.track(["-vf", "data.txt"]).unwrap();
    assert!(set.is_used('v').is_some());
    assert_eq!(set.scan_value::<&str>('f', 0), Some("data.txt"));
    assert!(set.is_used('x').is_none());
}

#[test]
fn clear_then_redefine_reproduces_results() {
    let args = ["-vn", "5", "-t", "a", "-tb"];

    let mut set = OptionSet::new();
    let mut snapshots = Vec::new();
    for _ in 0..2 {
        set.define("vn:t:").unwrap();
        set.describe('n', Some("%d"), None).unwrap();
        set.track(args).unwrap();
        snapshots.push(set.options().to_vec());
        set.clear();
        assert!(set.is_empty());
        assert!(set.is_used('v').is_none());
        assert_eq!(set.value_count('t'), 0);
    }
    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[0][2].values(), ["a", "b"]);
}

#[test]
fn independent_sets_do_not_share_state() {
    let mut first = OptionSet::new();
    first.define("a").unwrap();
    let mut second = OptionSet::new();
    second.define("a").unwrap();

    first.track(["-a"]).unwrap();
    assert!(first.is_used('a').is_some());
    assert!(second.is_used('a').is_none());
}

#[test]
fn duplicate_definitions_follow_policy() {
    let mut overriding = OptionSet::new();
    overriding.define("hh:").unwrap();
    assert_eq!(overriding.len(), 1);
    assert!(overriding.find('h').unwrap().takes_argument);

    let mut rejecting = OptionSet::with_syntax(ParserSyntax {
        duplicates: DuplicatePolicy::Reject,
        ..Default::default()
    });
    assert!(matches!(
        rejecting.define("hh:"),
        Err(Error::DuplicateOption('h'))
    ));
    assert!(rejecting.is_empty());
}

#[test]
fn option_file_drives_tracking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.yaml");
    std::fs::write(
        &path,
        r#"
spec: "vt:"
describe:
  - name: t
    format: "%x"
    description: Hex value
"#,
    )
    .unwrap();

    let mut set = OptionFile::load(&path).unwrap().build().unwrap();
    set.track(["-vt", "ff", "-t0x10"]).unwrap();
    let values: Vec<(usize, u8)> = set.values_of('t').collect();
    assert_eq!(values, vec![(0, 255), (1, 16)]);
}

#[test]
fn call_site_formats_read_undescribed_options() {
    let mut set = OptionSet::new();
    set.define("vn:f:b:d:h").unwrap();
    set.track(["-vn", "42", "-fdata.txt", "-b1", "-d2.5"]).unwrap();

    assert_eq!(set.scan_value::<i32>('n', 0), None);
    assert_eq!(set.scan_value_as::<i32>('n', 0, Some("%d")), Some(42));
    assert_eq!(set.scan_value_as::<&str>('f', 0, None), Some("data.txt"));
    assert_eq!(set.scan_value_as::<bool>('b', 0, Some("%b")), Some(true));
    assert_eq!(set.scan_value_as::<f64>('d', 0, Some("%lf")), Some(2.5));
    assert_eq!(set.scan_value_as::<&str>('h', 0, None), None);
}
