use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{DefaultValue, SchemaField, SchemaRecord};

/// `Field::<T>::required("name")` or `Field::<T>::with_default("name", ...)`
fn field_descriptor(field: &SchemaField, vc_schema_path: &syn::Path) -> TokenStream {
    let ty = field.ty;
    let name = field.wire_name();

    match &field.attrs.default {
        None => quote! {
            #vc_schema_path::Field::<#ty>::required(#name)
        },
        Some(DefaultValue::Trait(_)) => quote! {
            #vc_schema_path::Field::<#ty>::with_default(
                #name,
                <#ty as ::core::default::Default>::default,
            )
        },
        Some(DefaultValue::Expr(expr)) => quote! {
            #vc_schema_path::Field::<#ty>::with_default(#name, || #expr)
        },
    }
}

fn field_info(field: &SchemaField, vc_schema_path: &syn::Path) -> TokenStream {
    let ty = field.ty;
    let name = field.wire_name();
    let with_default = field.attrs.default.as_ref().map(|_| quote!(.with_default()));

    quote! {
        #vc_schema_path::FieldInfo::new::<#ty>(#name) #with_default
    }
}

pub(crate) fn impl_record(record: &SchemaRecord) -> TokenStream {
    let meta = &record.meta;
    let vc_schema_path = meta.vc_schema_path();
    let result_ = crate::path::result_();
    let dispatch_ = crate::path::dispatch_(vc_schema_path);

    let field_infos = record.fields.iter().map(|f| field_info(f, vc_schema_path));

    // Non-generic types own a plain cell; generic ones share a TypeId-keyed cell.
    let schema_body = if meta.impl_with_generic() {
        quote! {
            static CELL: #vc_schema_path::GenericSchemaCell = #vc_schema_path::GenericSchemaCell::new();
            CELL.get_or_insert::<Self>(|| {
                #vc_schema_path::Schema::new::<Self>(&[ #(#field_infos),* ])
            })
        }
    } else {
        quote! {
            static CELL: #vc_schema_path::SchemaCell = #vc_schema_path::SchemaCell::new();
            CELL.get_or_init(|| {
                #vc_schema_path::Schema::new::<Self>(&[ #(#field_infos),* ])
            })
        }
    };

    let unpack_fields = record.fields.iter().map(|field| {
        let ident = field.ident;
        let descriptor = field_descriptor(field, vc_schema_path);
        quote! { #ident: reader.field(&#descriptor)?, }
    });

    let pack_fields = record.fields.iter().map(|field| {
        let ident = field.ident;
        let name = field.wire_name();
        quote! { writer.field(#name, &self.#ident)?; }
    });

    let record_impl = meta.impl_trait(
        quote!(#vc_schema_path::Record),
        quote! {
            fn schema() -> &'static #vc_schema_path::Schema {
                #schema_body
            }

            fn unpack_fields<__F: #vc_schema_path::Format>(
                reader: &#vc_schema_path::RecordReader<'_, __F>,
            ) -> #result_<Self, #vc_schema_path::Error> {
                #result_::Ok(Self { #(#unpack_fields)* })
            }

            fn pack_fields<__F: #vc_schema_path::Format>(
                &self,
                writer: &mut #vc_schema_path::RecordWriter<__F>,
            ) -> #result_<(), #vc_schema_path::Error> {
                #(#pack_fields)*
                #result_::Ok(())
            }
        },
    );

    let pack_impl = meta.impl_trait(
        quote!(#vc_schema_path::Pack),
        quote! {
            #[inline]
            fn pack<__F: #vc_schema_path::Format>(
                &self,
            ) -> #result_<__F::Node, #vc_schema_path::Error> {
                #dispatch_::pack_record::<__F, Self>(self)
            }
        },
    );

    let unpack_impl = meta.impl_trait(
        quote!(#vc_schema_path::Unpack),
        quote! {
            const KIND: #vc_schema_path::Kind = #vc_schema_path::Kind::Record;

            #[inline]
            fn unpack<__F: #vc_schema_path::Format>(
                node: &__F::Node,
            ) -> #result_<Self, #vc_schema_path::Error> {
                #dispatch_::unpack_record::<__F, Self>(node)
            }
        },
    );

    let describe_impl = meta.impl_trait(
        quote!(#vc_schema_path::Describe),
        quote! {
            fn describe() -> #vc_schema_path::Description {
                #vc_schema_path::Description::Record(
                    <Self as #vc_schema_path::Record>::schema()
                )
            }
        },
    );

    quote! {
        #record_impl
        #pack_impl
        #unpack_impl
        #describe_impl
    }
}
