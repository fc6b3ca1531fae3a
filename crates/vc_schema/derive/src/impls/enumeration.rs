use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::SchemaEnum;

pub(crate) fn impl_enumeration(enumeration: &SchemaEnum) -> TokenStream {
    let meta = &enumeration.meta;
    let vc_schema_path = meta.vc_schema_path();
    let result_ = crate::path::result_();
    let dispatch_ = crate::path::dispatch_(vc_schema_path);

    let names: Vec<String> = enumeration.variants.iter().map(|v| v.wire_name()).collect();
    let descriptors = enumeration.variants.iter().zip(&names).map(|(variant, name)| {
        let ident = variant.ident;
        quote! { #vc_schema_path::EnumDescriptor::new(#name, Self::#ident) }
    });

    let enumeration_impl = meta.impl_trait(
        quote!(#vc_schema_path::Enumeration),
        quote! {
            const DESCRIPTORS: &'static [#vc_schema_path::EnumDescriptor<Self>] = &[
                #(#descriptors),*
            ];
        },
    );

    let pack_impl = meta.impl_trait(
        quote!(#vc_schema_path::Pack),
        quote! {
            #[inline]
            fn pack<__F: #vc_schema_path::Format>(
                &self,
            ) -> #result_<__F::Node, #vc_schema_path::Error> {
                #dispatch_::pack_enum::<__F, Self>(self)
            }
        },
    );

    let unpack_impl = meta.impl_trait(
        quote!(#vc_schema_path::Unpack),
        quote! {
            const KIND: #vc_schema_path::Kind = #vc_schema_path::Kind::Enumeration;

            #[inline]
            fn unpack<__F: #vc_schema_path::Format>(
                node: &__F::Node,
            ) -> #result_<Self, #vc_schema_path::Error> {
                #dispatch_::unpack_enum::<__F, Self>(node)
            }
        },
    );

    let describe_impl = meta.impl_trait(
        quote!(#vc_schema_path::Describe),
        quote! {
            fn describe() -> #vc_schema_path::Description {
                #vc_schema_path::Description::Enumeration(&[ #(#names),* ])
            }
        },
    );

    quote! {
        #enumeration_impl
        #pack_impl
        #unpack_impl
        #describe_impl
    }
}
