use proc_macro2::TokenStream;

use crate::derive_data::SchemaMeta;

/// Generate `auto_register` submission.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &SchemaMeta) -> TokenStream {
    use quote::quote_spanned;

    let Some(span) = meta.attrs().auto_register else {
        return TokenStream::new();
    };

    // Invalid for generic types.
    if meta.impl_with_generic() {
        return TokenStream::new();
    }

    let auto_register_ = crate::path::auto_register_(meta.vc_schema_path());
    let ident = meta.ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::AutoRegistration::of::<#ident>()
        }
    }
}

/// Generate `auto_register` submission.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &SchemaMeta) -> TokenStream {
    TokenStream::new()
}
