use crate::{Kind, Unpack};

// -----------------------------------------------------------------------------
// Field

/// The descriptor of one record field: its wire name and optional default.
///
/// # Examples
///
/// ```
/// use vc_schema::Field;
///
/// let port = Field::<u16>::with_default("port", || 8080);
/// assert_eq!(port.name(), "port");
/// assert_eq!(port.default_value(), Some(8080));
///
/// let address = Field::<String>::required("address");
/// assert_eq!(address.default_value(), None);
/// ```
pub struct Field<T> {
    name: &'static str,
    default: Option<fn() -> T>,
}

impl<T> Field<T> {
    /// Creates a descriptor for a field without a default.
    #[inline]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    /// Creates a descriptor whose default is produced by `default`.
    #[inline]
    pub const fn with_default(name: &'static str, default: fn() -> T) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }

    /// Returns the wire name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the field has a default.
    #[inline]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Produces a fresh default value, if the field has one.
    #[inline]
    pub fn default_value(&self) -> Option<T> {
        self.default.map(|default| default())
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Type-erased information about a record field.
///
/// Stored in the record's [`Schema`](crate::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    type_name: &'static str,
    kind: Kind,
    has_default: bool,
}

impl FieldInfo {
    /// Creates the information for a field `name` of type `T`.
    #[inline]
    pub fn new<T: Unpack>(name: &'static str) -> Self {
        Self {
            name,
            type_name: core::any::type_name::<T>(),
            kind: T::KIND,
            has_default: false,
        }
    }

    /// Marks the field as having a default.
    #[inline]
    pub const fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Returns the wire name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the Rust type name of the field.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the conversion category of the field type.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns `true` if the field has a default.
    #[inline]
    pub const fn has_default(&self) -> bool {
        self.has_default
    }
}
