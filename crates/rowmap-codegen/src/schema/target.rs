use super::{ErrorSet, Field, RenameRule};

#[derive(Debug)]
pub(crate) struct Target {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Mapped fields, in declaration order. Skipped fields are not listed.
    pub(crate) fields: Vec<Field>,

    /// Struct-level attributes
    pub(crate) attrs: TargetAttr,
}

#[derive(Debug, Default)]
pub(crate) struct TargetAttr {
    /// Default alias rule from `#[materialize(rename_all = "...")]`
    pub(crate) rename_all: Option<RenameRule>,
}

impl Target {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "materialized fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "generic targets are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let attrs = errs
            .push_result(TargetAttr::from_ast(&ast.attrs))
            .unwrap_or_default();

        let mut fields = vec![];

        for node in node.named.iter() {
            if let Some(field) = errs.push_result(Field::from_ast(node)) {
                if !field.attrs.skip {
                    fields.push(field);
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Target {
            ident: ast.ident.clone(),
            fields,
            attrs,
        })
    }
}

impl TargetAttr {
    fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut result = TargetAttr::default();

        for attr in attrs {
            if !attr.path().is_ident("materialize") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    if result.rename_all.is_some() {
                        return Err(meta.error("duplicate `rename_all`"));
                    }
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    result.rename_all = Some(RenameRule::from_lit(&lit)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported materialize attribute"))
                }
            })?;
        }

        Ok(result)
    }
}
