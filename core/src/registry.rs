//! The option registry.
//!
//! [`OptionSet`] owns every [`OptionDef`] in registration order plus a
//! name index for constant-time lookup. Tracking ([`track`]) and value
//! access ([`scan_value`]) are implemented on the same type in their own
//! modules.
//!
//! [`track`]: OptionSet::track
//! [`scan_value`]: OptionSet::scan_value

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{DuplicatePolicy, OptionDef, ParserSyntax};

/// A set of recognized options and their tracked values.
///
/// # Examples
///
/// ```
/// use shortopt_core::OptionSet;
///
/// let mut set = OptionSet::new();
/// set.define("vn:f:h").unwrap();
///
/// assert!(!set.find('v').unwrap().takes_argument);
/// assert!(set.find('n').unwrap().takes_argument);
/// assert!(set.find('f').unwrap().takes_argument);
/// assert!(!set.find('h').unwrap().takes_argument);
/// assert!(set.find('x').is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    pub(crate) syntax: ParserSyntax,
    pub(crate) options: Vec<OptionDef>,
    pub(crate) index: HashMap<char, usize>,
}

impl OptionSet {
    /// Creates an empty set with the default syntax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with custom syntax.
    pub fn with_syntax(syntax: ParserSyntax) -> Self {
        Self {
            syntax,
            ..Default::default()
        }
    }

    /// Returns the syntax this set parses with.
    pub fn syntax(&self) -> &ParserSyntax {
        &self.syntax
    }

    /// Registers every option named in a spec string.
    ///
    /// The string is split on the argument marker and the group separator.
    /// Each character of each group becomes an option; the last character of
    /// a group takes an argument. When the string does not end with the
    /// argument marker, the last registered option is forced back to a flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOption`] if the set rejects duplicates and
    /// a name is already defined or repeats within `spec`. Nothing is
    /// registered in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortopt_core::OptionSet;
    ///
    /// let mut set = OptionSet::new();
    /// set.define("ab:c").unwrap();
    /// let kinds: Vec<(char, bool)> = set
    ///     .options()
    ///     .iter()
    ///     .map(|o| (o.name, o.takes_argument))
    ///     .collect();
    /// assert_eq!(kinds, vec![('a', false), ('b', true), ('c', false)]);
    /// ```
    pub fn define(&mut self, spec: &str) -> Result<()> {
        let marker = self.syntax.argument_marker;
        let separator = self.syntax.group_separator;

        let mut pending = Vec::new();
        for group in spec
            .split(|c| c == marker || c == separator)
            .filter(|g| !g.is_empty())
        {
            let last = group.chars().count() - 1;
            for (i, name) in group.chars().enumerate() {
                pending.push(OptionDef::new(name, i == last));
            }
        }

        if !spec.ends_with(marker) {
            if let Some(last) = pending.last_mut() {
                last.takes_argument = false;
            }
        }

        if self.syntax.duplicates == DuplicatePolicy::Reject {
            let mut seen: HashSet<char> = self.index.keys().copied().collect();
            if let Some(dup) = pending.iter().find(|def| !seen.insert(def.name)) {
                return Err(Error::DuplicateOption(dup.name));
            }
        }

        debug!(spec, count = pending.len(), "defining options from spec string");
        for def in pending {
            self.insert(def);
        }
        Ok(())
    }

    /// Registers a single declared option.
    ///
    /// Any tracked state carried by `def` is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOption`] if the set rejects duplicates and
    /// `def.name` is already defined.
    pub fn define_option(&mut self, mut def: OptionDef) -> Result<()> {
        if self.syntax.duplicates == DuplicatePolicy::Reject && self.index.contains_key(&def.name) {
            return Err(Error::DuplicateOption(def.name));
        }
        def.reset();
        self.insert(def);
        Ok(())
    }

    /// Attaches a scan format and description to a defined option.
    ///
    /// Both fields are replaced, so passing `None` clears them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedOption`] if `name` is not defined.
    pub fn describe(
        &mut self,
        name: char,
        format: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        let def = self.find_mut(name).ok_or(Error::UndefinedOption(name))?;
        def.format = format.map(String::from);
        def.description = description.map(String::from);
        Ok(())
    }

    /// Finds an option by name.
    pub fn find(&self, name: char) -> Option<&OptionDef> {
        self.index.get(&name).map(|&slot| &self.options[slot])
    }

    pub(crate) fn find_mut(&mut self, name: char) -> Option<&mut OptionDef> {
        let slot = *self.index.get(&name)?;
        self.options.get_mut(slot)
    }

    /// Returns `true` if `name` is defined.
    pub fn contains(&self, name: char) -> bool {
        self.index.contains_key(&name)
    }

    /// All options in registration order.
    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    /// Number of defined options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if no option is defined.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Releases every definition and value, keeping the syntax.
    ///
    /// Calling it on an empty set is a no-op.
    pub fn clear(&mut self) {
        self.options = Vec::new();
        self.index = HashMap::new();
    }

    /// Inserts `def`, replacing an existing option of the same name in
    /// place. Returns its slot.
    fn insert(&mut self, def: OptionDef) -> usize {
        if let Some(&slot) = self.index.get(&def.name) {
            debug!(name = %def.name, "redefining option");
            self.options[slot] = def;
            return slot;
        }
        let slot = self.options.len();
        self.index.insert(def.name, slot);
        self.options.push(def);
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(set: &OptionSet) -> Vec<(char, bool)> {
        set.options()
            .iter()
            .map(|o| (o.name, o.takes_argument))
            .collect()
    }

    #[test]
    fn test_define_marks_group_tails() {
        let mut set = OptionSet::new();
        set.define("vn:f:h").unwrap();
        assert_eq!(
            kinds(&set),
            vec![('v', false), ('n', true), ('f', true), ('h', false)]
        );
    }

    #[test]
    fn test_define_trailing_marker_keeps_last_argument() {
        let mut set = OptionSet::new();
        set.define("hvn:").unwrap();
        assert_eq!(kinds(&set), vec![('h', false), ('v', false), ('n', true)]);
    }

    #[test]
    fn test_define_separator_ends_group() {
        let mut set = OptionSet::new();
        set.define("hv n:").unwrap();
        assert_eq!(kinds(&set), vec![('h', false), ('v', true), ('n', true)]);
    }

    #[test]
    fn test_define_without_marker_forces_last_flag() {
        for spec in ["a", "ab", "a:b", "a: b", "abc:d:ef"] {
            let mut set = OptionSet::new();
            set.define(spec).unwrap();
            let last = set.options().last().unwrap();
            assert!(!last.takes_argument, "spec {spec:?}");
        }
    }

    #[test]
    fn test_define_empty_spec_registers_nothing() {
        let mut set = OptionSet::new();
        set.define("").unwrap();
        set.define(": :").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_define_custom_syntax() {
        let mut set = OptionSet::with_syntax(ParserSyntax {
            argument_marker: '=',
            group_separator: ',',
            ..Default::default()
        });
        set.define("ab=,c").unwrap();
        assert_eq!(kinds(&set), vec![('a', false), ('b', true), ('c', false)]);
    }

    #[test]
    fn test_duplicate_override_replaces_in_place() {
        let mut set = OptionSet::new();
        set.define("hn:").unwrap();
        set.describe('h', None, Some("Show help")).unwrap();
        set.define("h:").unwrap();

        assert_eq!(kinds(&set), vec![('h', true), ('n', true)]);
        assert_eq!(set.find('h').unwrap().description, None);
    }

    #[test]
    fn test_duplicate_override_within_spec() {
        let mut set = OptionSet::new();
        set.define("hh").unwrap();
        assert_eq!(kinds(&set), vec![('h', false)]);
    }

    #[test]
    fn test_duplicate_reject_leaves_set_untouched() {
        let mut set = OptionSet::with_syntax(ParserSyntax {
            duplicates: DuplicatePolicy::Reject,
            ..Default::default()
        });
        set.define("vn:").unwrap();

        let err = set.define("ab:v").unwrap_err();
        assert!(matches!(err, Error::DuplicateOption('v')));
        assert_eq!(kinds(&set), vec![('v', false), ('n', true)]);

        let err = set.define("hh").unwrap_err();
        assert!(matches!(err, Error::DuplicateOption('h')));
        assert!(!set.contains('h'));

        let err = set.define_option(OptionDef::flag('n')).unwrap_err();
        assert!(matches!(err, Error::DuplicateOption('n')));
    }

    #[test]
    fn test_define_option_discards_tracked_state() {
        let mut def = OptionDef::with_argument('t');
        def.used = true;
        def.values.push("stale".to_string());

        let mut set = OptionSet::new();
        set.define_option(def).unwrap();
        let t = set.find('t').unwrap();
        assert!(!t.is_used());
        assert!(t.values().is_empty());
    }

    #[test]
    fn test_describe_undefined_fails() {
        let mut set = OptionSet::new();
        set.define("a").unwrap();
        let err = set.describe('z', Some("%d"), Some("missing")).unwrap_err();
        assert!(matches!(err, Error::UndefinedOption('z')));
    }

    #[test]
    fn test_describe_sets_metadata() {
        let mut set = OptionSet::new();
        set.define("n:").unwrap();
        set.describe('n', Some("%d"), Some("Number")).unwrap();
        let n = set.find('n').unwrap();
        assert_eq!(n.format.as_deref(), Some("%d"));
        assert_eq!(n.description.as_deref(), Some("Number"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut set = OptionSet::new();
        set.define("ab:").unwrap();
        set.clear();
        assert!(set.is_empty());
        assert!(set.find('a').is_none());
        set.clear();
        assert!(set.is_empty());
    }
}
