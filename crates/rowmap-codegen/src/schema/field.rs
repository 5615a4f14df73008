use super::{Actions, Column, ErrorSet, RenameRule};

use quote::ToTokens;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Column alias from `#[column("...")]`
    pub(crate) column: Option<Column>,

    /// Directions the property takes part in, from `#[actions(...)]`
    pub(crate) actions: Option<Actions>,

    /// True if the field is annotated with `#[skip]`
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "materialized fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    attrs.column = errs.push_result(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("actions") {
                if attrs.actions.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[actions] attribute",
                    ));
                } else {
                    attrs.actions = errs.push_result(Actions::from_ast(attr));
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(attr, "#[skip] takes no arguments"));
                } else {
                    attrs.skip = true;
                }
            }
        }

        if attrs.skip && (attrs.column.is_some() || attrs.actions.is_some()) {
            errs.push(syn::Error::new_spanned(
                ident,
                "a #[skip] field cannot also declare #[column] or #[actions]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    /// Property name: the field name without a raw identifier prefix.
    pub(crate) fn name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(stripped) => stripped.to_string(),
            None => name,
        }
    }

    /// Column alias the property binds to unless reconfigured.
    pub(crate) fn alias(&self, rename: Option<RenameRule>) -> String {
        match (&self.attrs.column, rename) {
            (Some(column), _) => column.name.value(),
            (None, Some(rule)) => rule.apply(&self.name()),
            (None, None) => self.name(),
        }
    }

    /// The field type as written, used in diagnostics.
    pub(crate) fn declared_type(&self) -> String {
        self.ty.to_token_stream().to_string().replace(' ', "")
    }
}
