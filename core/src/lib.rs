//! Short-option parsing with combined clusters and repeatable options.
//!
//! This crate parses getopt-style command lines made of single-character
//! options:
//!
//! - [`OptionSet`]: the option registry. [`define`](OptionSet::define)
//!   reads a compact spec string such as `"vn:f:h"`, where a trailing `:`
//!   marks an option that takes an argument.
//! - [`track`](OptionSet::track): a single pass over argv that handles
//!   clusters (`-abc`), attached values (`-fdata.txt`), separated values
//!   (`-f data.txt`) and repeated options (`-t 1 -t 2`).
//! - [`scan_value`](OptionSet::scan_value) and
//!   [`values_of`](OptionSet::values_of): typed access through
//!   scanf-style [`ScanFormat`]s.
//! - [`OptionFile`]: YAML/JSON declarations of option sets.
//! - [`help_text`], [`verbose_table`], [`format_options`]: rendering.
//!
//! Malformed command lines (unknown options, a missing trailing argument)
//! are [`Error`]s meant to end the program; see
//! [`track_or_exit`](OptionSet::track_or_exit). Value lookups that find
//! nothing are not errors and come back as `None`.
//!
//! # Example
//!
//! ```
//! use shortopt_core::OptionSet;
//!
//! let mut set = OptionSet::new();
//! set.define("vn:f:h").unwrap();
//! set.describe('v', None, Some("Verbose mode")).unwrap();
//! set.describe('n', Some("%d"), Some("Number (int)")).unwrap();
//! set.describe('f', Some("%s"), Some("Filename (string)")).unwrap();
//!
//! set.track(["-vn", "42", "-fdata.txt", "-n", "7"]).unwrap();
//!
//! assert!(set.is_used('v').is_some());
//! assert!(set.is_used('h').is_none());
//! assert_eq!(set.scan_value::<&str>('f', 0), Some("data.txt"));
//!
//! let numbers: Vec<(usize, i32)> = set.values_of('n').collect();
//! assert_eq!(numbers, vec![(0, 42), (1, 7)]);
//! ```

mod accessor;
mod config;
mod error;
mod output;
mod registry;
mod scan;
mod tracker;
mod types;
mod value;

pub use accessor::Values;
pub use config::{OptionDecl, OptionFile, OptionMeta};
pub use error::{Error, QueryMiss, Result};
pub use output::{OutputFormat, format_options, help_text, verbose_table};
pub use registry::OptionSet;
pub use scan::{Conversion, ScanFormat, TRUE_WORDS};
pub use types::{DuplicatePolicy, OptionDef, ParserSyntax};
pub use value::{FromValue, Value};
