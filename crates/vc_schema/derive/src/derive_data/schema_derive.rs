use syn::{Data, DeriveInput, Fields};

use super::{SchemaEnum, SchemaField, SchemaMeta, SchemaRecord, SchemaTransparent, SchemaVariant};
use super::TypeAttributes;

// -----------------------------------------------------------------------------
// SchemaDerive

/// The parsed derive input, classified by shape.
pub(crate) enum SchemaDerive<'a> {
    Record(SchemaRecord<'a>),
    Transparent(SchemaTransparent<'a>),
    Enumeration(SchemaEnum<'a>),
    Variant(SchemaEnum<'a>),
}

impl<'a> SchemaDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = SchemaMeta::new(&input.ident, &input.generics, attrs)?;

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => {
                    let fields = fields
                        .named
                        .iter()
                        .map(SchemaField::new)
                        .collect::<syn::Result<Vec<_>>>()?;
                    Ok(Self::Record(SchemaRecord::new(meta, fields)?))
                }
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Self::Transparent(
                    SchemaTransparent::new(meta, &fields.unnamed[0])?,
                )),
                _ => Err(syn::Error::new_spanned(
                    &input.ident,
                    "`#[derive(Schema)]` supports structs with named fields \
                     and tuple structs with exactly one field",
                )),
            },
            Data::Enum(data) => {
                if data.variants.is_empty() {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "`#[derive(Schema)]` needs at least one variant",
                    ));
                }

                let variants = data
                    .variants
                    .iter()
                    .map(SchemaVariant::new)
                    .collect::<syn::Result<Vec<_>>>()?;

                let units = variants.iter().filter(|v| v.ty.is_none()).count();
                if units == variants.len() {
                    Ok(Self::Enumeration(SchemaEnum::new(meta, variants)?))
                } else if units == 0 {
                    Ok(Self::Variant(SchemaEnum::new(meta, variants)?))
                } else {
                    Err(syn::Error::new_spanned(
                        &input.ident,
                        "enum variants must be either all unit variants \
                         or all single-value variants",
                    ))
                }
            }
            Data::Union(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "`#[derive(Schema)]` does not support unions",
            )),
        }
    }

    pub fn meta(&self) -> &SchemaMeta<'a> {
        match self {
            Self::Record(record) => &record.meta,
            Self::Transparent(transparent) => &transparent.meta,
            Self::Enumeration(enumeration) | Self::Variant(enumeration) => &enumeration.meta,
        }
    }
}
