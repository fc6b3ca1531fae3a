use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, Ident, parse_quote};

use super::TypeAttributes;

// -----------------------------------------------------------------------------
// SchemaMeta

/// Data shared by every shape: the type, its generics and its attributes.
pub(crate) struct SchemaMeta<'a> {
    ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    vc_schema_path: syn::Path,
}

impl<'a> SchemaMeta<'a> {
    pub fn new(ident: &'a Ident, generics: &'a Generics, attrs: TypeAttributes) -> syn::Result<Self> {
        if let Some(lifetime) = generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`#[derive(Schema)]` does not support lifetime parameters",
            ));
        }

        Ok(Self {
            ident,
            generics,
            attrs,
            vc_schema_path: crate::path::vc_schema(),
        })
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn vc_schema_path(&self) -> &syn::Path {
        &self.vc_schema_path
    }

    /// Returns `true` if the type has type or const parameters.
    pub fn impl_with_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)))
    }

    /// Generics with every type parameter bounded by `Pack + Unpack + 'static`.
    pub fn bounded_generics(&self) -> Generics {
        let vc_schema_path = &self.vc_schema_path;
        let mut generics = self.generics.clone();

        let idents: Vec<Ident> = generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect();

        let where_clause = generics.make_where_clause();
        for ident in idents {
            where_clause.predicates.push(parse_quote! {
                #ident: #vc_schema_path::Pack + #vc_schema_path::Unpack + 'static
            });
        }

        generics
    }

    /// `impl<...> #trait_path for Type<...> where ... { #body }`
    pub fn impl_trait(&self, trait_path: TokenStream, body: TokenStream) -> TokenStream {
        let ident = self.ident;
        let generics = self.bounded_generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        quote! {
            impl #impl_generics #trait_path for #ident #ty_generics #where_clause {
                #body
            }
        }
    }
}
