//! See [`Schema`](derive_schema).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static SCHEMA_ATTRIBUTE_NAME: &str = "schema";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Schema Derivation
///
/// `#[derive(Schema)]` declares how a type is converted. The shape of the
/// type decides what is generated:
///
/// | Shape | Traits | Converted as |
/// |---|---|---|
/// | `struct T { a: A, b: B }` | `Record` | a keyed structure |
/// | `struct T(A);` | none extra | the inner value |
/// | `enum T { A, B }` | `Enumeration` | the enumerator name |
/// | `enum T { A(X), B(Y) }` | `Variant` | the first alternative that decodes |
///
/// `Pack`, `Unpack` and `Describe` are implemented for every shape. Other
/// shapes (unit structs, multi-field tuple structs, mixed enums, unions)
/// are rejected.
///
/// Enumerations must also implement `Clone` and `PartialEq`.
///
/// ## Field Defaults
///
/// A field without a default is required. Absent optional fields
/// (`Option<T>`) become `None` without one.
///
/// ```rust, ignore
/// #[derive(Schema)]
/// struct Client {
///     #[schema(default = String::from("127.0.0.1"))]
///     address: String,
///     #[schema(default = 8080)]
///     port: u16,
///     #[schema(default)] // `Default::default()`
///     tags: Vec<String>,
/// }
/// ```
///
/// ## Wire Names
///
/// Fields and enumerators use their Rust name unless renamed. Two fields or
/// enumerators of one type may not share a wire name.
///
/// ```rust, ignore
/// #[derive(Schema, Clone, PartialEq)]
/// enum Mode {
///     #[schema(rename = "internal")]
///     Internal,
///     External,
/// }
/// ```
///
/// ## Variant Order
///
/// Alternatives are tried in declaration order and the first full decode
/// wins. Declare the most specific alternative first.
///
/// ## Auto Registration
///
/// `#[schema(auto_register)]` submits the type to
/// `SchemaRegistry::auto_register`. It is ignored on generic types and when
/// the `auto_register` feature is disabled.
///
/// ## Generics
///
/// Every type parameter is bounded by `Pack + Unpack + 'static`. Lifetime
/// parameters are not supported.
#[proc_macro_derive(Schema, attributes(schema))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::SchemaDerive::from_input(&ast) {
        Ok(derive) => impls::impl_schema(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
