#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_schema::...` paths, which must also resolve
// inside this crate's own tests and doc-tests.
extern crate self as vc_schema;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod api;
mod enumeration;
mod error;
mod format;
mod impls;
mod record;
mod variant;

pub mod dispatch;
pub mod registry;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use api::{ConversionError, Phase, from_file, from_string, to_string};
pub use dispatch::{Kind, Pack, Unpack};
pub use enumeration::{EnumDescriptor, Enumeration};
pub use error::{Error, ErrorKind};
pub use format::{Document, Format, Member, Owned};
pub use record::{Field, FieldInfo, GenericSchemaCell, Record, RecordReader, RecordWriter};
pub use record::{Schema, SchemaCell};
pub use registry::{Describe, Description};
pub use variant::{Alternative, Variant};

pub use vc_schema_derive::Schema;
