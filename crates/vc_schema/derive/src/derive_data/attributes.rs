//! Parsing of `#[schema(...)]` attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, LitStr, Token};

use crate::SCHEMA_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Helpers

fn for_each_meta(
    attrs: &[Attribute],
    mut func: impl FnMut(ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(SCHEMA_ATTRIBUTE_NAME))
        .try_for_each(|attr| attr.parse_nested_meta(&mut func))
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        let name = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(meta.error(format!("duplicate `{name}` attribute")));
    }
    *slot = Some(value);
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the type itself.
///
/// - `#[schema(auto_register)]`
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for_each_meta(attrs, |meta| {
            if meta.path.is_ident("auto_register") {
                set_once(&mut this.auto_register, meta.path.span(), &meta)
            } else {
                Err(meta.error("unknown type attribute, expected `auto_register`"))
            }
        })?;

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// The default of a record field.
pub(crate) enum DefaultValue {
    /// `#[schema(default)]`
    Trait(Span),
    /// `#[schema(default = EXPR)]`
    Expr(Box<Expr>),
}

/// Attributes on a field or an enum variant.
///
/// - `#[schema(default)]`, `#[schema(default = EXPR)]`
/// - `#[schema(rename = "name")]`
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub default: Option<DefaultValue>,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for_each_meta(attrs, |meta| {
            if meta.path.is_ident("default") {
                let value = if meta.input.peek(Token![=]) {
                    DefaultValue::Expr(Box::new(meta.value()?.parse()?))
                } else {
                    DefaultValue::Trait(meta.path.span())
                };
                set_once(&mut this.default, value, &meta)
            } else if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                if name.value().is_empty() {
                    return Err(syn::Error::new(name.span(), "wire names cannot be empty"));
                }
                set_once(&mut this.rename, name, &meta)
            } else {
                Err(meta.error("unknown field attribute, expected `default` or `rename`"))
            }
        })?;

        Ok(this)
    }

    /// Span of the default, for errors on places that cannot have one.
    pub fn default_span(&self) -> Option<Span> {
        match self.default.as_ref()? {
            DefaultValue::Trait(span) => Some(*span),
            DefaultValue::Expr(expr) => Some(expr.span()),
        }
    }

    /// Returns `true` if no attribute was given.
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.rename.is_none()
    }
}
