use alloc::boxed::Box;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::FieldInfo;

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

// -----------------------------------------------------------------------------
// Schema

/// The static description of a record type.
///
/// Fields keep their declaration order, which is the packing order. Lookups
/// by name go through an index table.
///
/// Built once per type and shared read-only by every conversion, see
/// [`SchemaCell`](crate::SchemaCell).
#[derive(Debug, Clone)]
pub struct Schema {
    type_name: &'static str,
    fields: Box<[FieldInfo]>,
    indices: HashMap<&'static str, usize, FixedState>,
}

impl Schema {
    /// Creates the schema of record `T` from its fields in declaration order.
    ///
    /// If two fields share a name, lookups find the first.
    pub fn new<T: 'static>(fields: &[FieldInfo]) -> Self {
        let mut indices = HashMap::with_capacity_and_hasher(fields.len(), FIXED_HASH_STATE);
        for (index, field) in fields.iter().enumerate() {
            indices.entry(field.name()).or_insert(index);
        }

        Self {
            type_name: core::any::type_name::<T>(),
            fields: fields.into(),
            indices,
        }
    }

    /// Returns the Rust type name of the record.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the field named `name`, if present.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(self.index_of(name)?)
    }

    /// Returns the field at `index`, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the declaration index of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns an iterator over the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldInfo::name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Schema;
    use crate::{FieldInfo, Kind};
    use alloc::vec::Vec;

    struct Sample;

    #[test]
    fn keeps_declaration_order() {
        let schema = Schema::new::<Sample>(&[
            FieldInfo::new::<u16>("port"),
            FieldInfo::new::<Option<bool>>("secure").with_default(),
            FieldInfo::new::<Vec<i32>>("ids"),
        ]);

        assert!(schema.type_name().ends_with("Sample"));
        assert_eq!(schema.field_len(), 3);
        assert_eq!(
            schema.field_names().collect::<Vec<_>>(),
            ["port", "secure", "ids"]
        );
        assert_eq!(schema.index_of("ids"), Some(2));
        assert_eq!(schema.field_at(1).unwrap().kind(), Kind::Optional);
        assert!(schema.field("secure").unwrap().has_default());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_the_first() {
        let schema = Schema::new::<Sample>(&[
            FieldInfo::new::<u8>("x"),
            FieldInfo::new::<u64>("x"),
        ]);

        assert_eq!(schema.index_of("x"), Some(0));
        assert_eq!(schema.field("x").unwrap().type_name(), "u8");
    }
}
