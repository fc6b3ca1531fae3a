//! Paths into `vc_schema` used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_schema` crate.
///
/// 1. For crates that depend on `vc_schema`, `::vc_schema` is returned.
/// 2. For crates that depend on `vc_convert`, `::vc_convert::schema` is returned.
/// 3. For other situations, `::vc_schema` is returned, but this may be incorrect.
///
/// Reads the caller's manifest, so call it once per derive.
pub(crate) fn vc_schema() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_schema"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn result_() -> TokenStream {
    quote! { ::core::result::Result }
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}

#[inline(always)]
pub(crate) fn dispatch_(vc_schema_path: &syn::Path) -> TokenStream {
    quote! { #vc_schema_path::dispatch }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(vc_schema_path: &syn::Path) -> TokenStream {
    quote! { #vc_schema_path::__macro_exports::auto_register }
}
