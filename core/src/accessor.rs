//! Value access on a tracked [`OptionSet`].
//!
//! Lookups never fail loudly: a missing option, an unused one, a flag, a
//! missing or empty format, an index past the end and a format mismatch all
//! come back as `None` from [`scan_value`](OptionSet::scan_value). Use
//! [`try_scan`](OptionSet::try_scan) to see which [`QueryMiss`] applied.
//! [`scan_value_as`](OptionSet::scan_value_as) takes the format at the call
//! site instead of the one attached by `describe`.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::trace;

use crate::error::QueryMiss;
use crate::registry::OptionSet;
use crate::scan::ScanFormat;
use crate::types::OptionDef;
use crate::value::FromValue;

impl OptionSet {
    /// Returns the option if it occurred on the command line.
    pub fn is_used(&self, name: char) -> Option<&OptionDef> {
        self.find(name).filter(|def| def.used)
    }

    /// Scans value `index` of option `name` with its configured format.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortopt_core::OptionSet;
    ///
    /// let mut set = OptionSet::new();
    /// set.define("vn:f:").unwrap();
    /// set.describe('n', Some("%d"), Some("Number")).unwrap();
    /// set.describe('f', Some("%s"), Some("Filename")).unwrap();
    /// set.track(["-vn", "42", "-fdata.txt"]).unwrap();
    ///
    /// assert_eq!(set.scan_value::<i32>('n', 0), Some(42));
    /// assert_eq!(set.scan_value::<&str>('f', 0), Some("data.txt"));
    /// assert_eq!(set.scan_value::<i32>('n', 1), None);
    /// assert_eq!(set.scan_value::<bool>('v', 0), None);
    /// ```
    pub fn scan_value<'a, T: FromValue<'a>>(&'a self, name: char, index: usize) -> Option<T> {
        self.try_scan(name, index).ok()
    }

    /// Like [`scan_value`](Self::scan_value), reporting why nothing was
    /// found.
    ///
    /// # Errors
    ///
    /// Checks run in this order: [`QueryMiss::Undefined`],
    /// [`QueryMiss::Unused`], [`QueryMiss::Flag`], [`QueryMiss::NoFormat`],
    /// [`QueryMiss::EmptyFormat`], [`QueryMiss::OutOfRange`], then
    /// [`QueryMiss::InvalidFormat`], [`QueryMiss::Mismatch`] and
    /// [`QueryMiss::WrongType`] while scanning.
    pub fn try_scan<'a, T: FromValue<'a>>(
        &'a self,
        name: char,
        index: usize,
    ) -> Result<T, QueryMiss> {
        let def = self.argument_option(name)?;
        let format = def.format.as_deref().ok_or(QueryMiss::NoFormat)?;
        scan_at(def, index, Some(format))
    }

    /// Scans value `index` of option `name` with `format` instead of the
    /// configured one. `None` returns the raw text.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortopt_core::OptionSet;
    ///
    /// let mut set = OptionSet::new();
    /// set.define("n:f:").unwrap();
    /// set.track(["-n", "0x1f", "-f", " data.txt"]).unwrap();
    ///
    /// assert_eq!(set.scan_value_as::<i32>('n', 0, Some("%i")), Some(31));
    /// assert_eq!(set.scan_value_as::<&str>('n', 0, None), Some("0x1f"));
    /// assert_eq!(set.scan_value_as::<&str>('f', 0, None), Some(" data.txt"));
    /// assert_eq!(set.scan_value::<&str>('f', 0), None);
    /// ```
    pub fn scan_value_as<'a, T: FromValue<'a>>(
        &'a self,
        name: char,
        index: usize,
        format: Option<&str>,
    ) -> Option<T> {
        self.try_scan_as(name, index, format).ok()
    }

    /// Like [`scan_value_as`](Self::scan_value_as), reporting why nothing
    /// was found.
    ///
    /// # Errors
    ///
    /// The checks of [`try_scan`](Self::try_scan), except that
    /// [`QueryMiss::NoFormat`] never applies.
    pub fn try_scan_as<'a, T: FromValue<'a>>(
        &'a self,
        name: char,
        index: usize,
        format: Option<&str>,
    ) -> Result<T, QueryMiss> {
        let def = self.argument_option(name)?;
        scan_at(def, index, format)
    }

    /// The option `name` if it is defined, used and takes an argument.
    fn argument_option(&self, name: char) -> Result<&OptionDef, QueryMiss> {
        let def = self.find(name).ok_or(QueryMiss::Undefined)?;
        if !def.used {
            return Err(QueryMiss::Unused);
        }
        if !def.takes_argument {
            return Err(QueryMiss::Flag);
        }
        Ok(def)
    }

    /// Number of values collected by `name`; 0 if undefined or unused.
    pub fn value_count(&self, name: char) -> usize {
        self.find(name).map_or(0, |def| def.values.len())
    }

    /// Raw values collected by `name`, empty if undefined.
    pub fn raw_values(&self, name: char) -> &[String] {
        self.find(name)
            .map(|def| def.values.as_slice())
            .unwrap_or_default()
    }

    /// Iterates `(index, value)` pairs of `name` from index 0.
    ///
    /// Iteration stops at the first index whose scan fails, which is at
    /// [`value_count`](Self::value_count) at the latest. Each call starts
    /// over.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortopt_core::OptionSet;
    ///
    /// let mut set = OptionSet::new();
    /// set.define("t:").unwrap();
    /// set.describe('t', Some("%d"), None).unwrap();
    /// set.track(["-t", "1", "-t", "2", "-t", "3"]).unwrap();
    ///
    /// let values: Vec<(usize, i64)> = set.values_of('t').collect();
    /// assert_eq!(values, vec![(0, 1), (1, 2), (2, 3)]);
    /// ```
    pub fn values_of<'a, T: FromValue<'a>>(&'a self, name: char) -> Values<'a, T> {
        Values {
            set: self,
            name,
            index: 0,
            done: false,
            _marker: PhantomData,
        }
    }
}

/// Iterator returned by [`OptionSet::values_of`].
/// Scans value `index` of `def`. A `format` of `None` returns the raw text.
fn scan_at<'a, T: FromValue<'a>>(
    def: &'a OptionDef,
    index: usize,
    format: Option<&str>,
) -> Result<T, QueryMiss> {
    if format.is_some_and(str::is_empty) {
        return Err(QueryMiss::EmptyFormat);
    }
    let raw = def.values.get(index).ok_or(QueryMiss::OutOfRange {
        index,
        len: def.values.len(),
    })?;

    let scan_format = match format {
        Some(format) => ScanFormat::parse(format)
            .ok_or_else(|| QueryMiss::InvalidFormat(format.to_string()))?,
        None => ScanFormat::Raw,
    };
    let value = scan_format.scan(raw).ok_or(QueryMiss::Mismatch)?;
    trace!(name = %def.name, index, ?value, "scanned option value");
    T::from_value(value).ok_or(QueryMiss::WrongType)
}

#[derive(Debug)]
pub struct Values<'a, T> {
    set: &'a OptionSet,
    name: char,
    index: usize,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: FromValue<'a>> Iterator for Values<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.set.scan_value(self.name, self.index) {
            Some(value) => {
                let index = self.index;
                self.index += 1;
                Some((index, value))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<'a, T: FromValue<'a>> FusedIterator for Values<'a, T> {}
