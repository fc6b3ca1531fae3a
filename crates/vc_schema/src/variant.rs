use core::fmt;

use crate::{Error, Format};

// -----------------------------------------------------------------------------
// Variant

/// A tagged union decoded by trying its alternatives in a fixed order.
///
/// `ALTERNATIVES` is the documented priority list. Placing a more permissive
/// alternative first shadows the ones after it.
///
/// # Examples
///
/// ```
/// use vc_schema::{Schema, Variant};
///
/// #[derive(Schema, Debug, PartialEq)]
/// enum Number {
///     Int(i64),
///     Float(f64),
/// }
///
/// assert_eq!(Number::ALTERNATIVES, ["Int", "Float"]);
/// ```
pub trait Variant: Sized + 'static {
    /// Alternative names, in the order they are tried on decode.
    const ALTERNATIVES: &'static [&'static str];
}

// -----------------------------------------------------------------------------
// Alternative

/// One decode attempt of a [`Variant`], bound to a format.
pub struct Alternative<F: Format, T> {
    name: &'static str,
    decode: fn(&F::Node) -> Result<T, Error>,
}

impl<F: Format, T> Alternative<F, T> {
    /// Creates an alternative.
    #[inline]
    pub const fn new(name: &'static str, decode: fn(&F::Node) -> Result<T, Error>) -> Self {
        Self { name, decode }
    }

    /// Returns the alternative name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Tries to decode `node` as this alternative.
    #[inline]
    pub fn decode(&self, node: &F::Node) -> Result<T, Error> {
        (self.decode)(node)
    }
}

impl<F: Format, T> fmt::Debug for Alternative<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alternative")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
