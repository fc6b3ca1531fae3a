//! The format-agnostic dispatcher.
//!
//! Every convertible type implements [`Pack`] and [`Unpack`]. Leaves and
//! standard containers are implemented in this crate; records, enumerations,
//! variants and transparent newtypes get theirs from `#[derive(Schema)]`,
//! which routes through the generic algorithms of this module.

use alloc::format;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::{Alternative, Enumeration, Error, Format, Record, RecordWriter, Variant};

// -----------------------------------------------------------------------------
// Kind

/// How a type is converted, fixed per type at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Scalars and strings.
    Leaf,
    /// `Option<T>`.
    Optional,
    /// Ordered containers, arrays and tuples.
    Sequence,
    /// Associative containers.
    Map,
    /// A type with named fields.
    Record,
    /// A type whose values are a closed set of names.
    Enumeration,
    /// A tagged union decoded by trying alternatives in order.
    Variant,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Leaf => "leaf",
            Self::Optional => "optional",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Record => "record",
            Self::Enumeration => "enumeration",
            Self::Variant => "variant",
        })
    }
}

// -----------------------------------------------------------------------------
// Pack & Unpack

/// Converts a value into a node of any [`Format`].
pub trait Pack {
    /// Packs `self` into a node of `F`.
    fn pack<F: Format>(&self) -> Result<F::Node, Error>;

    /// Returns `true` if the value stands for "nothing".
    ///
    /// Record writers omit such fields on formats without null.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

/// Converts a node of any [`Format`] into a value.
pub trait Unpack: Sized {
    /// The conversion category of this type.
    const KIND: Kind;

    /// Unpacks a node of `F`.
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error>;

    /// The value used when a record field of this type is absent and has no
    /// default. Only `Option<T>` provides one.
    #[inline]
    fn absent() -> Option<Self> {
        None
    }
}

// -----------------------------------------------------------------------------
// Entry points

/// Packs any convertible value.
#[inline]
pub fn pack<F: Format, T: Pack + ?Sized>(value: &T) -> Result<F::Node, Error> {
    value.pack::<F>()
}

/// Unpacks any convertible value.
#[inline]
pub fn unpack<F: Format, T: Unpack>(node: &F::Node) -> Result<T, Error> {
    T::unpack::<F>(node)
}

/// Packs a record by walking its fields in declaration order.
pub fn pack_record<F: Format, T: Record>(value: &T) -> Result<F::Node, Error> {
    let schema = T::schema();
    trace!("pack record `{}` as {}", schema.type_name(), F::NAME);

    let mut writer = RecordWriter::<F>::with_capacity(schema.field_len());
    value.pack_fields(&mut writer)?;
    writer.finish()
}

/// Unpacks a record, resolving each field from input, default or absence.
pub fn unpack_record<F: Format, T: Record>(node: &F::Node) -> Result<T, Error> {
    trace!("unpack record `{}` from {}", T::schema().type_name(), F::NAME);
    F::unpack_record::<T>(node)
}

/// Packs an enumerator as its declared name.
///
/// # Errors
///
/// Returns [`Error::Logic`] if `value` is missing from the descriptor list.
pub fn pack_enum<F: Format, E: Enumeration>(value: &E) -> Result<F::Node, Error> {
    trace!("pack enum `{}` as {}", core::any::type_name::<E>(), F::NAME);

    match E::DESCRIPTORS.iter().find(|desc| desc.value() == value) {
        Some(desc) => F::pack_str(desc.name()),
        None => Err(Error::logic(format!(
            "enum `{}` has a value without a descriptor",
            core::any::type_name::<E>()
        ))),
    }
}

/// Unpacks an enumerator from its name.
///
/// Names are compared exactly; the first matching descriptor wins.
///
/// # Errors
///
/// Returns [`Error::UnknownEnumName`] if no descriptor carries the name.
pub fn unpack_enum<F: Format, E: Enumeration>(node: &F::Node) -> Result<E, Error> {
    trace!("unpack enum `{}` from {}", core::any::type_name::<E>(), F::NAME);

    let name = F::unpack_str(node)?;
    match E::DESCRIPTORS.iter().find(|desc| desc.name() == name) {
        Some(desc) => Ok(desc.value().clone()),
        None => Err(Error::UnknownEnumName {
            type_name: core::any::type_name::<E>(),
            name: name.into_owned(),
        }),
    }
}

/// Unpacks a variant by trying `alternatives` in order.
///
/// The first alternative that decodes completely wins and later ones are
/// never tried.
///
/// # Errors
///
/// Returns [`Error::VariantNoMatch`] carrying every failure when no
/// alternative decodes.
pub fn unpack_variant<F: Format, T: Variant>(
    node: &F::Node,
    alternatives: &[Alternative<F, T>],
) -> Result<T, Error> {
    let type_name = core::any::type_name::<T>();
    trace!("unpack variant `{type_name}` from {}", F::NAME);

    let mut failures = Vec::with_capacity(alternatives.len());
    for alternative in alternatives {
        match alternative.decode(node) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(
                    "variant `{type_name}` rejected alternative `{}`: {err}",
                    alternative.name()
                );
                failures.push((alternative.name(), err));
            }
        }
    }

    Err(Error::VariantNoMatch {
        type_name,
        failures,
    })
}

/// Packs the alternative a variant currently holds.
#[inline]
pub fn pack_alternative<F: Format, T: Pack + ?Sized>(
    variant: &'static str,
    value: &T,
) -> Result<F::Node, Error> {
    trace!("pack alternative `{variant}` as {}", F::NAME);
    value.pack::<F>()
}
