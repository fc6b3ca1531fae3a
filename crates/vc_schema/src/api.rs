use alloc::string::ToString;
use core::fmt;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::{Document, Error, ErrorKind, Format, Owned, Pack, Unpack};

// -----------------------------------------------------------------------------
// Phase

/// The stage of a top-level conversion that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// [`from_string`], and [`from_file`] once the file is read.
    ParsingString,
    /// Reading the file in [`from_file`].
    ParsingFile,
    /// [`to_string`]
    EmittingToString,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ParsingString => "parsing string",
            Self::ParsingFile => "parsing file",
            Self::EmittingToString => "emitting to string",
        })
    }
}

// -----------------------------------------------------------------------------
// ConversionError

/// The error returned by the top-level conversion functions.
///
/// Renders as `vc_schema: on <phase>: <message>`.
///
/// # Examples
///
/// ```
/// use vc_schema::{ConversionError, Error, ErrorKind, Phase};
///
/// let err = ConversionError::new(Phase::ParsingFile, Error::FileNotFound {
///     path: "missing.json".into(),
/// });
///
/// assert_eq!(err.kind(), ErrorKind::FileNotFound);
/// assert_eq!(err.to_string(), "vc_schema: on parsing file: file not found: missing.json");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("vc_schema: on {phase}: {source}")]
pub struct ConversionError {
    phase: Phase,
    source: Error,
}

impl ConversionError {
    /// Creates a conversion error.
    #[inline]
    pub const fn new(phase: Phase, source: Error) -> Self {
        Self { phase, source }
    }

    /// Returns the phase that failed.
    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the underlying error.
    #[inline]
    pub const fn error(&self) -> &Error {
        &self.source
    }

    /// Returns the category of the underlying error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// Consumes `self`, returning the underlying error.
    #[inline]
    pub fn into_error(self) -> Error {
        self.source
    }
}

#[cold]
fn fail<F: Format>(phase: Phase, source: Error) -> ConversionError {
    debug!("{} conversion failed on {phase}: {source}", F::NAME);
    ConversionError::new(phase, source)
}

// -----------------------------------------------------------------------------
// Top-level API

/// Parses `text` as format `F` and unpacks a `T` from it.
///
/// # Examples
///
/// ```
/// use vc_schema::{Format, Schema};
/// # use vc_schema::{Error, Member};
/// # use std::borrow::Cow;
/// # enum Words {}
/// # impl Format for Words {
/// #     const NAME: &'static str = "words";
/// #     type Node = String;
/// #     type Text = str;
/// #     fn parse(text: &str) -> Result<String, Error> { Ok(text.into()) }
/// #     fn render(node: &String) -> Result<String, Error> { Ok(node.clone()) }
/// #     fn describe(_: &String) -> &'static str { "string" }
/// #     fn pack_null() -> Result<String, Error> { Err(Error::structure("no null")) }
/// #     fn is_null(_: &String) -> bool { false }
/// #     fn pack_bool(_: bool) -> Result<String, Error> { Err(Error::structure("no bool")) }
/// #     fn unpack_bool(_: &String) -> Result<bool, Error> { Err(Error::structure("no bool")) }
/// #     fn pack_i64(_: i64) -> Result<String, Error> { Err(Error::structure("no int")) }
/// #     fn unpack_i64(_: &String) -> Result<i64, Error> { Err(Error::structure("no int")) }
/// #     fn pack_u64(_: u64) -> Result<String, Error> { Err(Error::structure("no int")) }
/// #     fn unpack_u64(_: &String) -> Result<u64, Error> { Err(Error::structure("no int")) }
/// #     fn pack_f64(_: f64) -> Result<String, Error> { Err(Error::structure("no float")) }
/// #     fn unpack_f64(_: &String) -> Result<f64, Error> { Err(Error::structure("no float")) }
/// #     fn pack_str(value: &str) -> Result<String, Error> { Ok(value.into()) }
/// #     fn unpack_str(node: &String) -> Result<Cow<'_, str>, Error> { Ok(Cow::Borrowed(node)) }
/// #     fn pack_seq(_: Vec<String>) -> Result<String, Error> { Err(Error::structure("no seq")) }
/// #     fn unpack_seq(_: &String) -> Result<&[String], Error> { Err(Error::structure("no seq")) }
/// #     fn pack_map(_: Vec<(String, String)>) -> Result<String, Error> { Err(Error::structure("no map")) }
/// #     fn unpack_map(_: &String) -> Result<Vec<(String, &String)>, Error> { Err(Error::structure("no map")) }
/// #     fn pack_record(_: Vec<Member<String>>) -> Result<String, Error> { Err(Error::structure("no record")) }
/// #     fn is_record(_: &String) -> bool { false }
/// #     fn record_field<'a>(_: &'a String, _: &str) -> Option<&'a String> { None }
/// # }
/// #[derive(Schema, Clone, PartialEq, Debug)]
/// enum Mode {
///     Internal,
///     External,
/// }
///
/// // `Words` is a format whose documents are single strings.
/// let mode: Mode = vc_schema::from_string::<Words, _>("External").unwrap();
/// assert_eq!(mode, Mode::External);
///
/// let err = vc_schema::from_string::<Words, Mode>("Sideways").unwrap_err();
/// assert!(err.to_string().starts_with("vc_schema: on parsing string: unknown name `Sideways`"));
/// ```
pub fn from_string<F: Format, T: Unpack>(text: &F::Text) -> Result<T, ConversionError> {
    F::parse(text)
        .and_then(|node| T::unpack::<F>(&node))
        .map_err(|err| fail::<F>(Phase::ParsingString, err))
}

/// Reads the file at `path`, parses it as format `F` and unpacks a `T`.
///
/// # Errors
///
/// An unreadable file yields [`Error::FileNotFound`] under
/// [`Phase::ParsingFile`]. Once read, the contents go through the same
/// pipeline as [`from_string`], and its failures are reported under
/// [`Phase::ParsingString`].
pub fn from_file<F: Format, T: Unpack>(path: impl AsRef<Path>) -> Result<T, ConversionError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| {
        debug!("cannot read `{}`: {err}", path.display());
        fail::<F>(
            Phase::ParsingFile,
            Error::FileNotFound {
                path: path.display().to_string(),
            },
        )
    })?;

    <F::Text as Document>::from_bytes(&bytes)
        .and_then(F::parse)
        .and_then(|node| T::unpack::<F>(&node))
        .map_err(|err| fail::<F>(Phase::ParsingString, err))
}

/// Packs `value` and renders it as a document of format `F`.
pub fn to_string<F: Format, T: Pack + ?Sized>(value: &T) -> Result<Owned<F>, ConversionError> {
    value
        .pack::<F>()
        .and_then(|node| F::render(&node))
        .map_err(|err| fail::<F>(Phase::EmittingToString, err))
}
