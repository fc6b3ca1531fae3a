//! Static storage for record schemas.
//!
//! Used by `#[derive(Schema)]` to implement [`Record::schema`](crate::Record::schema).
//!
//! - [`SchemaCell`]: for non-generic types, a plain [`OnceLock`].
//! - [`GenericSchemaCell`]: for generic types. A `static` inside a generic
//!   function is shared by every instantiation, so the cell keys its
//!   schemas by [`TypeId`].

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::Schema;

// -----------------------------------------------------------------------------
// SchemaCell

/// Lazily built schema of a non-generic record.
///
/// # Examples
///
/// ```
/// use vc_schema::{FieldInfo, Schema, SchemaCell};
///
/// struct Point { x: i32, y: i32 }
///
/// fn schema() -> &'static Schema {
///     static CELL: SchemaCell = SchemaCell::new();
///     CELL.get_or_init(|| {
///         Schema::new::<Point>(&[FieldInfo::new::<i32>("x"), FieldInfo::new::<i32>("y")])
///     })
/// }
///
/// assert!(core::ptr::eq(schema(), schema()));
/// ```
pub struct SchemaCell(OnceLock<Schema>);

impl SchemaCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the schema, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> Schema) -> &Schema {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericSchemaCell

/// Lazily built schemas of a generic record, one per instantiation.
///
/// # Examples
///
/// ```
/// use vc_schema::{FieldInfo, GenericSchemaCell, Schema, Unpack};
///
/// struct Wrapper<T> { inner: T }
///
/// fn schema<T: Unpack + 'static>() -> &'static Schema {
///     static CELL: GenericSchemaCell = GenericSchemaCell::new();
///     CELL.get_or_insert::<Wrapper<T>>(|| {
///         Schema::new::<Wrapper<T>>(&[FieldInfo::new::<T>("inner")])
///     })
/// }
///
/// assert_eq!(schema::<u8>().field("inner").unwrap().type_name(), "u8");
/// assert_eq!(schema::<bool>().field("inner").unwrap().type_name(), "bool");
/// ```
pub struct GenericSchemaCell(RwLock<BTreeMap<TypeId, &'static Schema>>);

impl GenericSchemaCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(BTreeMap::new()))
    }

    /// Returns the schema of `G`, building it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> Schema) -> &'static Schema {
        let type_id = TypeId::of::<G>();
        match self.get_by_type_id(type_id) {
            Some(schema) => schema,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static Schema> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, schema: Schema) -> &'static Schema {
        // Another thread may have won the race; keep its schema.
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| &*Box::leak(Box::new(schema)))
    }
}
