//! A registry of convertible types, for introspection.
//!
//! The registry maps Rust type names to the static description of a type:
//! the [`Schema`] of a record, the names of an enumeration, the priority
//! list of a variant. It is never consulted by the conversions themselves.
//!
//! ## auto_register
//!
//! With the `auto_register` feature, non-generic types annotated with
//! `#[schema(auto_register)]` are collected at start-up through the
//! [`inventory`] crate, see [`SchemaRegistry::auto_register`].
//!
//! [`inventory`]: https://docs.rs/inventory

use core::any::TypeId;

use foldhash::fast::FixedState;
use hashbrown::{HashMap, HashSet};

use crate::{Kind, Schema, Unpack};

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

// -----------------------------------------------------------------------------
// Description

/// The static description of a registered type.
#[derive(Debug, Clone, Copy)]
pub enum Description {
    /// A record and its fields.
    Record(&'static Schema),
    /// An enumeration and its wire names, in declaration order.
    Enumeration(&'static [&'static str]),
    /// A variant and its alternatives, in priority order.
    Variant(&'static [&'static str]),
    /// A newtype converted as the named inner type.
    Transparent(&'static str),
}

/// A type that can describe itself to a [`SchemaRegistry`].
///
/// Implemented by `#[derive(Schema)]`.
pub trait Describe: 'static {
    /// Returns the static description of `Self`.
    fn describe() -> Description;
}

// -----------------------------------------------------------------------------
// Registration

/// One entry of a [`SchemaRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    type_id: TypeId,
    type_name: &'static str,
    kind: Kind,
    description: Description,
}

impl Registration {
    /// Creates the registration of `T`.
    pub fn of<T: Describe + Unpack>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
            kind: T::KIND,
            description: T::describe(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full Rust type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the last path segment of the type name, generics included.
    pub fn short_name(&self) -> &'static str {
        short_name(self.type_name)
    }

    /// Returns the conversion category.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the static description.
    #[inline]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the record schema, if this is a record.
    pub fn schema(&self) -> Option<&'static Schema> {
        match self.description {
            Description::Record(schema) => Some(schema),
            _ => None,
        }
    }
}

fn short_name(type_name: &'static str) -> &'static str {
    let path = match type_name.find('<') {
        Some(generics) => &type_name[..generics],
        None => type_name,
    };
    match path.rfind("::") {
        Some(sep) => &type_name[sep + 2..],
        None => type_name,
    }
}

// -----------------------------------------------------------------------------
// SchemaRegistry

/// A registry of convertible types.
///
/// # Examples
///
/// ```
/// use vc_schema::{Kind, Schema};
/// use vc_schema::registry::SchemaRegistry;
///
/// #[derive(Schema)]
/// struct Client {
///     address: String,
///     port: u16,
/// }
///
/// let mut registry = SchemaRegistry::new();
/// registry.register::<Client>();
///
/// assert_eq!(registry.classify("Client"), Some(Kind::Record));
///
/// let schema = registry.get::<Client>().unwrap().schema().unwrap();
/// assert_eq!(schema.field_names().collect::<Vec<_>>(), ["address", "port"]);
/// ```
pub struct SchemaRegistry {
    registrations: HashMap<TypeId, Registration, FixedState>,
    full_names: HashMap<&'static str, TypeId, FixedState>,
    short_names: HashMap<&'static str, TypeId, FixedState>,
    ambiguous_names: HashSet<&'static str, FixedState>,
}

impl Default for SchemaRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            registrations: HashMap::with_hasher(FIXED_HASH_STATE),
            full_names: HashMap::with_hasher(FIXED_HASH_STATE),
            short_names: HashMap::with_hasher(FIXED_HASH_STATE),
            ambiguous_names: HashSet::with_hasher(FIXED_HASH_STATE),
        }
    }

    /// Registers `T`. Returns `false` if it was already registered.
    pub fn register<T: Describe + Unpack>(&mut self) -> bool {
        self.insert(Registration::of::<T>())
    }

    fn insert(&mut self, registration: Registration) -> bool {
        let type_id = registration.type_id();
        if self.registrations.contains_key(&type_id) {
            return false;
        }

        log::trace!("register `{}` as {}", registration.type_name(), registration.kind());

        self.full_names.insert(registration.type_name(), type_id);

        // A short name shared by two types resolves to neither.
        let short = registration.short_name();
        if !self.ambiguous_names.contains(short) {
            if self.short_names.remove(short).is_some() {
                self.ambiguous_names.insert(short);
            } else {
                self.short_names.insert(short, type_id);
            }
        }

        self.registrations.insert(type_id, registration);
        true
    }

    /// Registers every type annotated with `#[schema(auto_register)]`.
    ///
    /// Returns `false` if the `auto_register` feature is disabled, in which
    /// case nothing is registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_schema::Schema;
    /// use vc_schema::registry::SchemaRegistry;
    ///
    /// #[derive(Schema, Clone, PartialEq)]
    /// #[schema(auto_register)]
    /// enum Mode {
    ///     Internal,
    ///     External,
    /// }
    ///
    /// let mut registry = SchemaRegistry::new();
    /// if registry.auto_register() {
    ///     assert!(registry.contains::<Mode>());
    /// }
    /// ```
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            for entry in inventory::iter::<AutoRegistration> {
                (entry.register)(self);
            }
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Returns the registration of `T`.
    #[inline]
    pub fn get<T: 'static>(&self) -> Option<&Registration> {
        self.registrations.get(&TypeId::of::<T>())
    }

    /// Returns the registration with the given full or short type name.
    ///
    /// Short names shared by several registered types resolve to `None`.
    pub fn get_by_name(&self, name: &str) -> Option<&Registration> {
        let type_id = self
            .full_names
            .get(name)
            .or_else(|| self.short_names.get(name))?;
        self.registrations.get(type_id)
    }

    /// Returns the conversion category of the type named `name`.
    #[inline]
    pub fn classify(&self, name: &str) -> Option<Kind> {
        self.get_by_name(name).map(Registration::kind)
    }

    /// Returns `true` if `T` is registered.
    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<T>())
    }

    /// Returns `true` if `name` is a short name shared by several types.
    #[inline]
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.ambiguous_names.contains(name)
    }

    /// Returns an iterator over every registration, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Registration> {
        self.registrations.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

// -----------------------------------------------------------------------------
// AutoRegistration

/// A registration submitted through `inventory` by `#[schema(auto_register)]`.
#[cfg(feature = "auto_register")]
pub struct AutoRegistration {
    register: fn(&mut SchemaRegistry) -> bool,
}

#[cfg(feature = "auto_register")]
impl AutoRegistration {
    /// Creates the submission for `T`.
    #[inline]
    pub const fn of<T: Describe + Unpack>() -> Self {
        Self {
            register: SchemaRegistry::register::<T>,
        }
    }
}

#[cfg(feature = "auto_register")]
inventory::collect!(AutoRegistration);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Description, SchemaRegistry, short_name};
    use crate::Kind;
    use crate::tests::{Client, Mode, Number, Port};

    #[test]
    fn short_names_strip_the_path() {
        assert_eq!(short_name("alloc::string::String"), "String");
        assert_eq!(short_name("Client"), "Client");
        assert_eq!(
            short_name("alloc::vec::Vec<core::option::Option<u8>>"),
            "Vec<core::option::Option<u8>>"
        );
    }

    #[test]
    fn registers_every_shape() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.register::<Client>());
        assert!(registry.register::<Mode>());
        assert!(registry.register::<Number>());
        assert!(registry.register::<Port>());
        assert!(!registry.register::<Client>());

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.classify("Client"), Some(Kind::Record));
        assert_eq!(registry.classify("Mode"), Some(Kind::Enumeration));
        assert_eq!(registry.classify("Number"), Some(Kind::Variant));
        assert_eq!(registry.classify("Port"), Some(Kind::Leaf));
        assert_eq!(registry.classify("Missing"), None);

        let mode = registry.get::<Mode>().unwrap();
        assert!(matches!(
            mode.description(),
            Description::Enumeration(["Internal", "External"])
        ));

        let number = registry.get_by_name(core::any::type_name::<Number>()).unwrap();
        assert!(matches!(
            number.description(),
            Description::Variant(["Int", "Seq", "Map"])
        ));

        let port = registry.get::<Port>().unwrap();
        assert!(matches!(port.description(), Description::Transparent("u16")));
    }

    #[test]
    fn shared_short_names_are_ambiguous() {
        mod other {
            #[derive(crate::Schema, Clone, PartialEq)]
            pub enum Mode {
                On,
            }
        }

        let mut registry = SchemaRegistry::new();
        registry.register::<Mode>();
        registry.register::<other::Mode>();

        assert!(registry.is_ambiguous("Mode"));
        assert!(registry.get_by_name("Mode").is_none());
        assert!(registry.contains::<other::Mode>());
        assert!(registry.get_by_name(core::any::type_name::<other::Mode>()).is_some());
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn collects_annotated_types() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.auto_register());
        assert!(registry.contains::<Client>());
    }
}
