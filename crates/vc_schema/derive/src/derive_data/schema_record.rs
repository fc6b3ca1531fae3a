use std::collections::BTreeMap;

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Field, Ident, Type};

use super::{FieldAttributes, SchemaMeta};

// -----------------------------------------------------------------------------
// SchemaField

/// A named field of a record.
pub(crate) struct SchemaField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl<'a> SchemaField<'a> {
    pub fn new(field: &'a Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;

        Ok(Self {
            ident,
            ty: &field.ty,
            attrs: FieldAttributes::parse_attrs(&field.attrs)?,
        })
    }

    /// The name used on the wire.
    pub fn wire_name(&self) -> String {
        match &self.attrs.rename {
            Some(name) => name.value(),
            None => self.ident.unraw().to_string(),
        }
    }
}

/// Fails on the first wire name used twice.
pub(super) fn check_unique_names(
    names: impl IntoIterator<Item = (String, proc_macro2::Span)>,
    what: &str,
) -> syn::Result<()> {
    let mut seen = BTreeMap::new();
    for (name, span) in names {
        if seen.insert(name.clone(), span).is_some() {
            return Err(syn::Error::new(
                span,
                format!("{what} name `{name}` is used more than once"),
            ));
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// SchemaRecord

/// `struct T { a: A, b: B }`
pub(crate) struct SchemaRecord<'a> {
    pub meta: SchemaMeta<'a>,
    pub fields: Vec<SchemaField<'a>>,
}

impl<'a> SchemaRecord<'a> {
    pub fn new(meta: SchemaMeta<'a>, fields: Vec<SchemaField<'a>>) -> syn::Result<Self> {
        check_unique_names(
            fields.iter().map(|field| (field.wire_name(), field.ident.span())),
            "field",
        )?;
        Ok(Self { meta, fields })
    }
}

// -----------------------------------------------------------------------------
// SchemaTransparent

/// `struct T(A);`
pub(crate) struct SchemaTransparent<'a> {
    pub meta: SchemaMeta<'a>,
    pub ty: &'a Type,
}

impl<'a> SchemaTransparent<'a> {
    pub fn new(meta: SchemaMeta<'a>, field: &'a Field) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        if !attrs.is_empty() {
            return Err(syn::Error::new(
                field.span(),
                "the field of a newtype takes no `#[schema(...)]` attributes",
            ));
        }
        Ok(Self { meta, ty: &field.ty })
    }
}
