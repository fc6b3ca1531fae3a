use syn::ext::IdentExt;
use syn::{Fields, Ident, Type, Variant};

use super::schema_record::check_unique_names;
use super::{FieldAttributes, SchemaMeta};

// -----------------------------------------------------------------------------
// SchemaVariant

/// One variant of an enumeration (`ty` is `None`) or of a variant type.
pub(crate) struct SchemaVariant<'a> {
    pub ident: &'a Ident,
    pub ty: Option<&'a Type>,
    pub attrs: FieldAttributes,
}

impl<'a> SchemaVariant<'a> {
    pub fn new(variant: &'a Variant) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&variant.attrs)?;
        if let Some(span) = attrs.default_span() {
            return Err(syn::Error::new(span, "enum variants cannot have a default"));
        }

        let ty = match &variant.fields {
            Fields::Unit => None,
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Some(&fields.unnamed[0].ty),
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "variants must be unit variants or hold exactly one unnamed value",
                ));
            }
        };

        Ok(Self {
            ident: &variant.ident,
            ty,
            attrs,
        })
    }

    /// The name used on the wire and in diagnostics.
    pub fn wire_name(&self) -> String {
        match &self.attrs.rename {
            Some(name) => name.value(),
            None => self.ident.unraw().to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// SchemaEnum

/// `enum T { A, B }` or `enum T { A(X), B(Y) }`
pub(crate) struct SchemaEnum<'a> {
    pub meta: SchemaMeta<'a>,
    pub variants: Vec<SchemaVariant<'a>>,
}

impl<'a> SchemaEnum<'a> {
    pub fn new(meta: SchemaMeta<'a>, variants: Vec<SchemaVariant<'a>>) -> syn::Result<Self> {
        check_unique_names(
            variants
                .iter()
                .map(|variant| (variant.wire_name(), variant.ident.span())),
            "variant",
        )?;
        Ok(Self { meta, variants })
    }

    /// Iterates `(variant, payload type)` of a variant type.
    pub fn alternatives(&self) -> impl Iterator<Item = (&SchemaVariant<'a>, &'a Type)> {
        self.variants
            .iter()
            .filter_map(|variant| Some((variant, variant.ty?)))
    }
}
