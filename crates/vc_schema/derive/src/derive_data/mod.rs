//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod schema_derive;
mod schema_enum;
mod schema_meta;
mod schema_record;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{DefaultValue, FieldAttributes, TypeAttributes};
pub(crate) use schema_derive::SchemaDerive;
pub(crate) use schema_enum::{SchemaEnum, SchemaVariant};
pub(crate) use schema_meta::SchemaMeta;
pub(crate) use schema_record::{SchemaField, SchemaRecord, SchemaTransparent};
