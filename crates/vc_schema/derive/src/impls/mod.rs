//! Code generation, one module per shape.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod enumeration;
mod record;
mod transparent;
mod variant;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::SchemaDerive;

/// Generates every impl of the derive, wrapped in an anonymous const.
pub(crate) fn impl_schema(derive: &SchemaDerive) -> TokenStream {
    let impls = match derive {
        SchemaDerive::Record(record) => record::impl_record(record),
        SchemaDerive::Transparent(transparent) => transparent::impl_transparent(transparent),
        SchemaDerive::Enumeration(enumeration) => enumeration::impl_enumeration(enumeration),
        SchemaDerive::Variant(variant) => variant::impl_variant(variant),
    };
    let auto_register = auto_register::get_auto_register_impl(derive.meta());

    quote! {
        const _: () = {
            #impls
            #auto_register
        };
    }
}
