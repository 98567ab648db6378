//! Option definitions and parser syntax settings.
//!
//! An [`OptionDef`] is one single-character option together with the raw
//! values it collected during tracking. [`ParserSyntax`] holds the
//! characters that shape both spec strings and command lines.

use serde::{Deserialize, Serialize};

/// How a definition that repeats an existing option name is handled.
///
/// # Examples
///
/// ```
/// use shortopt_core::DuplicatePolicy;
///
/// assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Override);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// The later definition replaces the earlier one in its registration
    /// slot (the default).
    #[default]
    Override,
    /// The whole definition call fails with
    /// [`Error::DuplicateOption`](crate::Error::DuplicateOption).
    Reject,
}

/// Characters that drive spec-string parsing and argv tracking.
///
/// # Examples
///
/// ```
/// use shortopt_core::ParserSyntax;
///
/// let syntax = ParserSyntax::default();
/// assert_eq!(syntax.option_marker, '-');
/// assert_eq!(syntax.argument_marker, ':');
/// assert_eq!(syntax.group_separator, ' ');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSyntax {
    /// Prefix that introduces an option cluster on the command line.
    pub option_marker: char,
    /// Marks the preceding option as argument-taking in a spec string.
    pub argument_marker: char,
    /// Separates option groups in a spec string.
    pub group_separator: char,
    /// Handling of repeated option names across definitions.
    pub duplicates: DuplicatePolicy,
}

impl Default for ParserSyntax {
    fn default() -> Self {
        Self {
            option_marker: '-',
            argument_marker: ':',
            group_separator: ' ',
            duplicates: DuplicatePolicy::Override,
        }
    }
}

/// A single-character option and its tracked state.
///
/// Build definitions with [`flag`](OptionDef::flag) or
/// [`with_argument`](OptionDef::with_argument), then chain
/// [`with_description`](OptionDef::with_description) and
/// [`with_format`](OptionDef::with_format).
///
/// # Examples
///
/// ```
/// use shortopt_core::OptionDef;
///
/// let number = OptionDef::with_argument('n')
///     .with_format("%d")
///     .with_description("Number (int)");
/// assert!(number.takes_argument);
/// assert!(!number.is_used());
/// assert!(number.values().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDef {
    /// Option character (e.g. `'v'` for `-v`).
    pub name: char,
    /// Whether the option consumes a value.
    pub takes_argument: bool,
    /// Help text.
    pub description: Option<String>,
    /// Scan format used to interpret raw values (e.g. `"%d"`).
    pub format: Option<String>,
    /// Tracked state is dumped but never read back.
    #[serde(skip_deserializing)]
    pub(crate) used: bool,
    #[serde(skip_deserializing)]
    pub(crate) values: Vec<String>,
}

impl OptionDef {
    /// Creates an option, argument-taking or not.
    pub fn new(name: char, takes_argument: bool) -> Self {
        Self {
            name,
            takes_argument,
            description: None,
            format: None,
            used: false,
            values: Vec::new(),
        }
    }

    /// Creates a flag (no argument).
    pub fn flag(name: char) -> Self {
        Self::new(name, false)
    }

    /// Creates an option that takes an argument.
    pub fn with_argument(name: char) -> Self {
        Self::new(name, true)
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a scan format.
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Whether the option occurred at least once.
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Raw values in order of appearance.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Drops tracked state, keeping the definition itself.
    pub(crate) fn reset(&mut self) {
        self.used = false;
        self.values.clear();
    }
}
