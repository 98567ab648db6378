//! Option files: declarative option sets in YAML or JSON.
//!
//! An option file names the parser syntax, an optional spec string, a table
//! of individually declared options and metadata for options the spec
//! string defined. [`OptionFile::build`] applies them in that order.
//!
//! # Example YAML
//!
//! ```yaml
//! syntax:
//!   duplicates: reject
//! spec: "vn:f:h"
//! options:
//!   - name: d
//!     takes_argument: true
//!     format: "%lf"
//!     description: Double value
//! describe:
//!   - name: n
//!     format: "%d"
//!     description: Number (int)
//!   - name: h
//!     description: Show help
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::registry::OptionSet;
use crate::types::{OptionDef, ParserSyntax};

/// One option declared in the `options` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDecl {
    /// Option character.
    pub name: char,
    /// Whether the option consumes a value.
    #[serde(default)]
    pub takes_argument: bool,
    /// Scan format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&OptionDecl> for OptionDef {
    fn from(decl: &OptionDecl) -> Self {
        Self {
            format: decl.format.clone(),
            description: decl.description.clone(),
            ..OptionDef::new(decl.name, decl.takes_argument)
        }
    }
}

/// Metadata for an option defined elsewhere (usually by `spec`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionMeta {
    /// Option character.
    pub name: char,
    /// Scan format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Declarative description of an [`OptionSet`].
///
/// # Examples
///
/// ```
/// use shortopt_core::OptionFile;
///
/// let file = OptionFile::from_yaml_str(r#"
/// spec: "vn:"
/// describe:
///   - name: n
///     format: "%d"
/// "#).unwrap();
///
/// let mut set = file.build().unwrap();
/// set.track(["-vn7"]).unwrap();
/// assert_eq!(set.scan_value::<i32>('n', 0), Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionFile {
    /// Parser syntax; defaults apply to omitted fields.
    pub syntax: ParserSyntax,
    /// Spec string defined first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
    /// Options defined one by one after the spec string.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDecl>,
    /// Metadata applied last.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub describe: Vec<OptionMeta>,
}

impl OptionFile {
    /// Loads an option file. `.yml`/`.yaml` files are read as YAML,
    /// anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::Error::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::Error::YamlError) /
    /// [`JsonError`](crate::Error::JsonError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(std::fs::File::open(path)?);
        let file = if is_yaml(path) {
            serde_yaml::from_reader(reader)?
        } else {
            serde_json::from_reader(reader)?
        };
        debug!(path = %path.display(), "loaded option file");
        Ok(file)
    }

    /// Saves the option file, choosing the format from the extension like
    /// [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::Error::IoError) if the file cannot be
    /// written, or a serialization error.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(std::fs::File::create(path)?);
        if is_yaml(path) {
            serde_yaml::to_writer(writer, self)?;
        } else {
            serde_json::to_writer_pretty(writer, self)?;
        }
        Ok(())
    }

    /// Parses YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Parses JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Builds an untracked [`OptionSet`].
    ///
    /// # Errors
    ///
    /// Propagates [`DuplicateOption`](crate::Error::DuplicateOption) under
    /// the reject policy and [`UndefinedOption`](crate::Error::UndefinedOption)
    /// for `describe` entries naming unknown options.
    pub fn build(&self) -> Result<OptionSet> {
        let mut set = OptionSet::with_syntax(self.syntax);
        if let Some(spec) = &self.spec {
            set.define(spec)?;
        }
        for decl in &self.options {
            set.define_option(decl.into())?;
        }
        for meta in &self.describe {
            set.describe(
                meta.name,
                meta.format.as_deref(),
                meta.description.as_deref(),
            )?;
        }
        Ok(set)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}
