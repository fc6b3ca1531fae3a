use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::SchemaTransparent;

pub(crate) fn impl_transparent(transparent: &SchemaTransparent) -> TokenStream {
    let meta = &transparent.meta;
    let ty = transparent.ty;
    let vc_schema_path = meta.vc_schema_path();
    let result_ = crate::path::result_();
    let option_ = crate::path::option_();

    let pack_impl = meta.impl_trait(
        quote!(#vc_schema_path::Pack),
        quote! {
            #[inline]
            fn pack<__F: #vc_schema_path::Format>(
                &self,
            ) -> #result_<__F::Node, #vc_schema_path::Error> {
                <#ty as #vc_schema_path::Pack>::pack::<__F>(&self.0)
            }

            #[inline]
            fn is_absent(&self) -> bool {
                <#ty as #vc_schema_path::Pack>::is_absent(&self.0)
            }
        },
    );

    let unpack_impl = meta.impl_trait(
        quote!(#vc_schema_path::Unpack),
        quote! {
            const KIND: #vc_schema_path::Kind = <#ty as #vc_schema_path::Unpack>::KIND;

            #[inline]
            fn unpack<__F: #vc_schema_path::Format>(
                node: &__F::Node,
            ) -> #result_<Self, #vc_schema_path::Error> {
                <#ty as #vc_schema_path::Unpack>::unpack::<__F>(node).map(Self)
            }

            #[inline]
            fn absent() -> #option_<Self> {
                <#ty as #vc_schema_path::Unpack>::absent().map(Self)
            }
        },
    );

    let describe_impl = meta.impl_trait(
        quote!(#vc_schema_path::Describe),
        quote! {
            fn describe() -> #vc_schema_path::Description {
                #vc_schema_path::Description::Transparent(::core::any::type_name::<#ty>())
            }
        },
    );

    quote! {
        #pack_impl
        #unpack_impl
        #describe_impl
    }
}
