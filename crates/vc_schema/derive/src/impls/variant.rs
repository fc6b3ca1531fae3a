use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::SchemaEnum;

pub(crate) fn impl_variant(variant: &SchemaEnum) -> TokenStream {
    let meta = &variant.meta;
    let vc_schema_path = meta.vc_schema_path();
    let result_ = crate::path::result_();
    let dispatch_ = crate::path::dispatch_(vc_schema_path);

    let names: Vec<String> = variant.alternatives().map(|(v, _)| v.wire_name()).collect();

    let pack_arms = variant.alternatives().zip(&names).map(|((alt, ty), name)| {
        let ident = alt.ident;
        quote! {
            Self::#ident(value) => #dispatch_::pack_alternative::<__F, #ty>(#name, value),
        }
    });

    // Declaration order is the decode priority.
    let alternatives = variant.alternatives().zip(&names).map(|((alt, ty), name)| {
        let ident = alt.ident;
        quote! {
            #vc_schema_path::Alternative::new(#name, |node| {
                <#ty as #vc_schema_path::Unpack>::unpack::<__F>(node).map(Self::#ident)
            })
        }
    });

    let variant_impl = meta.impl_trait(
        quote!(#vc_schema_path::Variant),
        quote! {
            const ALTERNATIVES: &'static [&'static str] = &[ #(#names),* ];
        },
    );

    let pack_impl = meta.impl_trait(
        quote!(#vc_schema_path::Pack),
        quote! {
            fn pack<__F: #vc_schema_path::Format>(
                &self,
            ) -> #result_<__F::Node, #vc_schema_path::Error> {
                match self {
                    #(#pack_arms)*
                }
            }
        },
    );

    let unpack_impl = meta.impl_trait(
        quote!(#vc_schema_path::Unpack),
        quote! {
            const KIND: #vc_schema_path::Kind = #vc_schema_path::Kind::Variant;

            fn unpack<__F: #vc_schema_path::Format>(
                node: &__F::Node,
            ) -> #result_<Self, #vc_schema_path::Error> {
                #dispatch_::unpack_variant::<__F, Self>(node, &[
                    #(#alternatives),*
                ])
            }
        },
    );

    let describe_impl = meta.impl_trait(
        quote!(#vc_schema_path::Describe),
        quote! {
            fn describe() -> #vc_schema_path::Description {
                #vc_schema_path::Description::Variant(
                    <Self as #vc_schema_path::Variant>::ALTERNATIVES
                )
            }
        },
    );

    quote! {
        #variant_impl
        #pack_impl
        #unpack_impl
        #describe_impl
    }
}
