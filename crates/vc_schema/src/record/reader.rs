use crate::{Error, Field, Format, Kind, Schema, Unpack};

// -----------------------------------------------------------------------------
// RecordReader

/// Resolves the fields of one keyed node.
///
/// Each field is resolved in this order:
///
/// 1. a present, non-null entry is decoded as the field type;
/// 2. else the field default, if the descriptor has one;
/// 3. else the absent value of the field type (`None` for `Option<T>`);
/// 4. else [`Error::MissingField`].
///
/// For optional fields a present null decodes to `None` at step 1.
pub struct RecordReader<'a, F: Format> {
    node: &'a F::Node,
    schema: &'static Schema,
}

impl<'a, F: Format> RecordReader<'a, F> {
    /// Creates a reader over `node`, which must be a keyed structure.
    #[inline]
    pub const fn new(node: &'a F::Node, schema: &'static Schema) -> Self {
        Self { node, schema }
    }

    /// Returns the keyed node being read.
    #[inline]
    pub const fn node(&self) -> &'a F::Node {
        self.node
    }

    /// Returns the schema of the record being read.
    #[inline]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Resolves one field.
    ///
    /// # Errors
    ///
    /// Decode failures are wrapped in [`Error::Field`]. A field that is
    /// absent, has no default and whose type has no absent value yields
    /// [`Error::MissingField`].
    pub fn field<T: Unpack>(&self, field: &Field<T>) -> Result<T, Error> {
        let name = field.name();

        if let Some(node) = F::record_field(self.node, name)
            && (T::KIND == Kind::Optional || !F::is_null(node))
        {
            return T::unpack::<F>(node).map_err(|err| err.in_field(name));
        }

        if let Some(value) = field.default_value() {
            return Ok(value);
        }

        T::absent().ok_or(Error::MissingField {
            type_name: self.schema.type_name(),
            field: name,
        })
    }
}
