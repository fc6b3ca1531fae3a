// -----------------------------------------------------------------------------
// EnumDescriptor

/// Pairs an enumerator with its wire name.
///
/// # Examples
///
/// ```
/// use vc_schema::{EnumDescriptor, Enumeration, Schema};
///
/// #[derive(Schema, Clone, PartialEq, Debug)]
/// enum Mode {
///     Internal,
///     #[schema(rename = "ext")]
///     External,
/// }
///
/// let names: Vec<_> = Mode::DESCRIPTORS.iter().map(EnumDescriptor::name).collect();
/// assert_eq!(names, ["Internal", "ext"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDescriptor<E: 'static> {
    name: &'static str,
    value: E,
}

impl<E: 'static> EnumDescriptor<E> {
    /// Creates a descriptor.
    #[inline]
    pub const fn new(name: &'static str, value: E) -> Self {
        Self { name, value }
    }

    /// Returns the wire name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the enumerator.
    #[inline]
    pub const fn value(&self) -> &E {
        &self.value
    }
}

// -----------------------------------------------------------------------------
// Enumeration

/// A type whose values are a closed set of names.
///
/// `DESCRIPTORS` covers every enumerator. Lookups scan it linearly, so when
/// two descriptors share a name or a value the first one wins.
///
/// Usually implemented by `#[derive(Schema)]` on a fieldless enum.
pub trait Enumeration: Clone + PartialEq + 'static {
    /// Every enumerator with its wire name, in declaration order.
    const DESCRIPTORS: &'static [EnumDescriptor<Self>];

    /// Returns the wire names in declaration order.
    fn names() -> impl Iterator<Item = &'static str> {
        Self::DESCRIPTORS.iter().map(EnumDescriptor::name)
    }
}
