use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ErrorKind

/// The category of an [`Error`], independent of where in the tree it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed wire data.
    Parse,
    /// A node does not have the shape the target type expects.
    Structure,
    /// A required field is absent and has no default.
    MissingField,
    /// A decoded string matches no enumerator.
    UnknownEnumName,
    /// No alternative of a variant decodes.
    VariantNoMatch,
    /// The input file could not be read.
    FileNotFound,
    /// A schema or library invariant was violated.
    Logic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parse => "parse error",
            Self::Structure => "structure error",
            Self::MissingField => "missing field",
            Self::UnknownEnumName => "unknown enum name",
            Self::VariantNoMatch => "no variant matches",
            Self::FileNotFound => "file not found",
            Self::Logic => "logic error",
        })
    }
}

// -----------------------------------------------------------------------------
// Error

/// Every failure a conversion can raise.
///
/// Nested failures are wrapped in [`Error::Field`], [`Error::Index`] and
/// [`Error::Entry`] on their way up, so the message names the path to the
/// offending node. [`Error::kind`] looks through these wrappers.
///
/// # Examples
///
/// ```
/// use vc_schema::{Error, ErrorKind};
///
/// let err = Error::MissingField { type_name: "Client", field: "port" }
///     .in_field("client")
///     .at_index(2);
///
/// assert_eq!(err.kind(), ErrorKind::MissingField);
/// assert_eq!(
///     err.to_string(),
///     "[2]: field `client`: missing field `port` of `Client`",
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed input: {0}")]
    Parse(Cow<'static, str>),

    #[error("{0}")]
    Structure(Cow<'static, str>),

    #[error("missing field `{field}` of `{type_name}`")]
    MissingField {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("unknown name `{name}` for enum `{type_name}`")]
    UnknownEnumName { type_name: &'static str, name: String },

    #[error("no alternative of `{type_name}` matches ({})", join_failures(.failures))]
    VariantNoMatch {
        type_name: &'static str,
        failures: Vec<(&'static str, Error)>,
    },

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("logic error: {0}")]
    Logic(Cow<'static, str>),

    #[error("field `{field}`: {source}")]
    Field {
        field: &'static str,
        source: Box<Error>,
    },

    #[error("[{index}]: {source}")]
    Index { index: usize, source: Box<Error> },

    #[error("entry `{key}`: {source}")]
    Entry { key: String, source: Box<Error> },
}

fn join_failures(failures: &[(&'static str, Error)]) -> String {
    failures
        .iter()
        .map(|(name, err)| format!("{name}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Creates an [`Error::Parse`] from any displayable backend error.
    #[cold]
    pub fn parse(err: impl fmt::Display) -> Self {
        Self::Parse(Cow::Owned(err.to_string()))
    }

    /// Creates an [`Error::Structure`] with the given message.
    #[cold]
    pub fn structure(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Structure(msg.into())
    }

    /// Creates an [`Error::Structure`] reading `expected {expected}, found {found}`.
    #[cold]
    pub fn unexpected(expected: &str, found: &str) -> Self {
        Self::Structure(Cow::Owned(format!("expected {expected}, found {found}")))
    }

    /// Creates an [`Error::Structure`] for a number that does not fit `T`.
    #[cold]
    pub fn out_of_range<T>(value: impl fmt::Display) -> Self {
        Self::Structure(Cow::Owned(format!(
            "{value} is out of range for `{}`",
            core::any::type_name::<T>()
        )))
    }

    /// Creates an [`Error::Structure`] for a fixed-length sequence of the wrong size.
    #[cold]
    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::Structure(Cow::Owned(format!(
            "expected a sequence of {expected} elements, found {found}"
        )))
    }

    /// Creates an [`Error::Logic`] with the given message.
    #[cold]
    pub fn logic(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Logic(msg.into())
    }

    /// Wraps `self` as having happened inside the record field `field`.
    #[inline]
    pub fn in_field(self, field: &'static str) -> Self {
        Self::Field {
            field,
            source: Box::new(self),
        }
    }

    /// Wraps `self` as having happened at position `index` of a sequence.
    #[inline]
    pub fn at_index(self, index: usize) -> Self {
        Self::Index {
            index,
            source: Box::new(self),
        }
    }

    /// Wraps `self` as having happened under the map key `key`.
    #[inline]
    pub fn in_entry(self, key: impl Into<String>) -> Self {
        Self::Entry {
            key: key.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping path wrappers.
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Field { source, .. }
        | Self::Index { source, .. }
        | Self::Entry { source, .. } = current
        {
            current = source;
        }
        current
    }

    /// Returns the category of the innermost error.
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            Self::Parse(_) => ErrorKind::Parse,
            Self::Structure(_) => ErrorKind::Structure,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::UnknownEnumName { .. } => ErrorKind::UnknownEnumName,
            Self::VariantNoMatch { .. } => ErrorKind::VariantNoMatch,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::Logic(_) => ErrorKind::Logic,
            // `root` never stops on a wrapper.
            Self::Field { .. } | Self::Index { .. } | Self::Entry { .. } => ErrorKind::Logic,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn kind_looks_through_wrappers() {
        let err = Error::unexpected("an integer", "string")
            .at_index(0)
            .in_entry("alpha")
            .in_field("clients");

        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(
            err.to_string(),
            "field `clients`: entry `alpha`: [0]: expected an integer, found string"
        );
    }

    #[test]
    fn variant_failures_are_listed_in_order() {
        let err = Error::VariantNoMatch {
            type_name: "Number",
            failures: vec![
                ("Int", Error::unexpected("an integer", "string")),
                ("Seq", Error::unexpected("a sequence", "string")),
            ],
        };

        assert_eq!(err.kind(), ErrorKind::VariantNoMatch);
        assert_eq!(
            err.to_string(),
            "no alternative of `Number` matches \
             (Int: expected an integer, found string; Seq: expected a sequence, found string)"
        );
    }

    #[test]
    fn out_of_range_names_the_target_type() {
        let err = Error::out_of_range::<u8>(300);
        assert_eq!(err.to_string(), "300 is out of range for `u8`");
    }
}
