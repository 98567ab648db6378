//! Single-pass argv tracking.
//!
//! Every token that starts with the option marker is a cluster of option
//! characters. Flags in a cluster are marked used and scanning continues.
//! The first argument-taking option ends the cluster: the rest of the token
//! becomes its value, or the next token does when nothing is left.
//! Tokens without the marker are skipped; positional arguments are not
//! modeled.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::registry::OptionSet;

impl OptionSet {
    /// Tracks an argument list, excluding the program name.
    ///
    /// Repeated options append values, so `-t 1 -t 2` leaves two values on
    /// `t`. A single occurrence takes a single value: in `-t 1 2` the `2` is
    /// an ordinary (skipped) token.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownOption`] when a cluster holds an undefined
    ///   character.
    /// - [`Error::MissingArgument`] when an argument-taking option needs the
    ///   next token and the list has ended.
    ///
    /// Both are usage errors; options seen before the failure keep their
    /// state.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortopt_core::OptionSet;
    ///
    /// let mut set = OptionSet::new();
    /// set.define("vn:f:h").unwrap();
    /// set.track(["-vn", "42", "-fdata.txt", "input.txt"]).unwrap();
    ///
    /// assert!(set.is_used('v').is_some());
    /// assert_eq!(set.raw_values('n'), ["42"]);
    /// assert_eq!(set.raw_values('f'), ["data.txt"]);
    /// assert!(set.is_used('h').is_none());
    /// ```
    pub fn track<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let token = arg.as_ref();
            let Some(cluster) = token.strip_prefix(self.syntax.option_marker) else {
                trace!(token, "skipping non-option token");
                continue;
            };

            let Some(slot) = self.track_cluster(cluster)? else {
                continue;
            };
            let Some(value) = args.next() else {
                return Err(Error::MissingArgument(token.to_string()));
            };
            let opt = &mut self.options[slot];
            debug!(name = %opt.name, value = value.as_ref(), "option value from next token");
            opt.values.push(value.as_ref().to_string());
        }
        Ok(())
    }

    /// Tracks the process arguments, skipping the program name.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn track_env(&mut self) -> Result<()> {
        self.track(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Tracks `args`, terminating the process on a malformed command line.
    ///
    /// On error the message is written to stderr as `ERROR: <message>` and
    /// the process exits with status 1.
    pub fn track_or_exit<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Err(err) = self.track(args) {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }

    /// Walks one cluster. Returns the slot of an argument-taking option
    /// whose value is in the next token.
    fn track_cluster(&mut self, cluster: &str) -> Result<Option<usize>> {
        for (pos, name) in cluster.char_indices() {
            let slot = *self.index.get(&name).ok_or(Error::UnknownOption(name))?;
            let opt = &mut self.options[slot];
            opt.used = true;
            trace!(name = %name, "option used");

            if !opt.takes_argument {
                continue;
            }
            let rest = &cluster[pos + name.len_utf8()..];
            if rest.is_empty() {
                return Ok(Some(slot));
            }
            debug!(name = %name, value = rest, "option value attached");
            opt.values.push(rest.to_string());
            return Ok(None);
        }
        Ok(None)
    }
}
