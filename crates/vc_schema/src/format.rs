use alloc::borrow::{Cow, ToOwned};
use alloc::format;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::Error;
use crate::record::{Record, RecordReader};

// -----------------------------------------------------------------------------
// Document

/// The textual (or binary) form a [`Format`] parses from and renders to.
///
/// Implemented for `str` and `[u8]`; `from_bytes` turns the raw contents of a
/// file into a document.
pub trait Document: ToOwned {
    /// Views raw bytes as a document.
    fn from_bytes(bytes: &[u8]) -> Result<&Self, Error>;
}

impl Document for str {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<&Self, Error> {
        core::str::from_utf8(bytes).map_err(Error::parse)
    }
}

impl Document for [u8] {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<&Self, Error> {
        Ok(bytes)
    }
}

/// The owned document type of a format: `String` or `Vec<u8>`.
pub type Owned<F> = <<F as Format>::Text as ToOwned>::Owned;

// -----------------------------------------------------------------------------
// Member

/// One named entry handed to [`Format::pack_record`].
///
/// A member always carries its wire name. Its value may be unset, which the
/// backend reports as a logic error.
#[derive(Debug, Clone, PartialEq)]
pub struct Member<N> {
    name: &'static str,
    value: Option<N>,
}

impl<N> Member<N> {
    /// Creates a member holding `value`.
    #[inline]
    pub const fn new(name: &'static str, value: N) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// Creates a member without a value.
    #[inline]
    pub const fn unset(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// Returns the wire name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Splits the member into its name and value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Logic`] if the member has no value.
    pub fn into_parts(self) -> Result<(&'static str, N), Error> {
        match self.value {
            Some(value) => Ok((self.name, value)),
            None => Err(Error::logic(format!(
                "member `{}` has no value to pack",
                self.name
            ))),
        }
    }
}

// -----------------------------------------------------------------------------
// Format

/// A wire format backend.
///
/// A backend is a zero-sized marker type. It owns a node type (its native
/// document tree), converts text to nodes and back, and knows how to build
/// and inspect leaves, sequences, maps and records inside that tree.
///
/// Backends are stateless: every operation is an associated function.
///
/// The generic machinery in this crate never looks inside a node on its own.
/// It only calls the operations below, so a node produced by one backend is
/// never handed to another.
pub trait Format: Sized + 'static {
    /// Human readable name, used in log lines.
    const NAME: &'static str;

    /// Whether the format has a null value.
    ///
    /// When `false`, absent optional fields are left out of records rather
    /// than packed as null.
    const SUPPORTS_NULL: bool = true;

    /// The backend's document tree.
    type Node: Clone + Debug;

    /// The document the backend parses from and renders to.
    type Text: ?Sized + Document;

    /// Parses a whole document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed input.
    fn parse(text: &Self::Text) -> Result<Self::Node, Error>;

    /// Renders a whole document.
    fn render(node: &Self::Node) -> Result<Owned<Self>, Error>;

    /// Names the shape of `node` for error messages, such as `"string"`.
    fn describe(node: &Self::Node) -> &'static str;

    // --- leaves ---

    fn pack_null() -> Result<Self::Node, Error>;
    fn is_null(node: &Self::Node) -> bool;

    fn pack_bool(value: bool) -> Result<Self::Node, Error>;
    fn unpack_bool(node: &Self::Node) -> Result<bool, Error>;

    fn pack_i64(value: i64) -> Result<Self::Node, Error>;
    fn unpack_i64(node: &Self::Node) -> Result<i64, Error>;

    fn pack_u64(value: u64) -> Result<Self::Node, Error>;
    fn unpack_u64(node: &Self::Node) -> Result<u64, Error>;

    fn pack_f64(value: f64) -> Result<Self::Node, Error>;
    fn unpack_f64(node: &Self::Node) -> Result<f64, Error>;

    fn pack_str(value: &str) -> Result<Self::Node, Error>;
    fn unpack_str(node: &Self::Node) -> Result<Cow<'_, str>, Error>;

    // --- containers ---

    /// Packs an ordered sequence.
    fn pack_seq(items: Vec<Self::Node>) -> Result<Self::Node, Error>;

    /// Views `node` as an ordered sequence.
    fn unpack_seq(node: &Self::Node) -> Result<&[Self::Node], Error>;

    /// Packs an associative container.
    ///
    /// Keys are packed nodes. A backend whose key space is narrower than its
    /// value space reports unsupported keys as [`Error::Structure`].
    fn pack_map(entries: Vec<(Self::Node, Self::Node)>) -> Result<Self::Node, Error>;

    /// Views `node` as an associative container.
    fn unpack_map(node: &Self::Node) -> Result<Vec<(Self::Node, &Self::Node)>, Error>;

    // --- records ---

    /// Packs the members of a record, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Logic`] if a member has no value.
    fn pack_record(members: Vec<Member<Self::Node>>) -> Result<Self::Node, Error>;

    /// Returns `true` if `node` is a keyed structure.
    fn is_record(node: &Self::Node) -> bool;

    /// Looks up the entry named `name` in a keyed structure.
    fn record_field<'a>(node: &'a Self::Node, name: &str) -> Option<&'a Self::Node>;

    /// Unpacks a record, driving the lookups by `T`'s field descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structure`] if `node` is not a keyed structure, and
    /// whatever the fields report otherwise.
    fn unpack_record<T: Record>(node: &Self::Node) -> Result<T, Error> {
        if !Self::is_record(node) {
            return Err(Error::structure(format!(
                "`{}` expects a keyed structure, found {}",
                T::schema().type_name(),
                Self::describe(node),
            )));
        }
        T::unpack_fields(&RecordReader::<Self>::new(node, T::schema()))
    }
}

// -----------------------------------------------------------------------------
// Tests
