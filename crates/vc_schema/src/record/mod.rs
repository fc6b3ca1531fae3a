//! Records: types with an ordered list of named fields.
//!
//! A record type is described once by a static [`Schema`] and converted
//! through [`Record`], whose field walkers read from a [`RecordReader`] and
//! write into a [`RecordWriter`].

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod field;
mod reader;
mod schema;
mod writer;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericSchemaCell, SchemaCell};
pub use field::{Field, FieldInfo};
pub use reader::RecordReader;
pub use schema::Schema;
pub use writer::RecordWriter;

use crate::{Error, Format};

// -----------------------------------------------------------------------------
// Record

/// A type converted field by field.
///
/// Usually implemented by `#[derive(Schema)]` on a struct with named fields.
///
/// # Examples
///
/// ```
/// use vc_schema::{Record, Schema};
///
/// #[derive(Schema)]
/// struct Client {
///     address: String,
///     #[schema(default = 8080)]
///     port: u16,
/// }
///
/// let schema = Client::schema();
/// assert_eq!(schema.field_names().collect::<Vec<_>>(), ["address", "port"]);
/// assert!(schema.field("port").unwrap().has_default());
/// ```
pub trait Record: Sized + 'static {
    /// The static description of this record.
    fn schema() -> &'static Schema;

    /// Builds a value, resolving every field through `reader`.
    fn unpack_fields<F: Format>(reader: &RecordReader<'_, F>) -> Result<Self, Error>;

    /// Writes every field into `writer`, in declaration order.
    fn pack_fields<F: Format>(&self, writer: &mut RecordWriter<F>) -> Result<(), Error>;
}
