use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_properties(&self) -> TokenStream {
        let properties = self
            .target
            .fields
            .iter()
            .map(|field| self.expand_property(field));

        quote! {
            vec![ #( #properties ),* ]
        }
    }

    fn expand_property(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &field.ident;
        let ty = &field.ty;
        let name = field.name();
        let alias = field.alias(self.target.attrs.rename_all);
        let declared = field.declared_type();
        let actions = field.attrs.actions.unwrap_or_default().to_tokens(rowmap);

        quote! {
            #rowmap::Property::new(
                #name,
                <#ty as #rowmap::Primitive>::TYPE,
                <#ty as #rowmap::Primitive>::NULLABLE,
                #declared,
                |target: &mut Self, value: #rowmap::Value| -> #rowmap::Result<()> {
                    target.#ident = <#ty as #rowmap::Primitive>::load(value)?;
                    Ok(())
                },
            )
            .with_alias(#alias)
            .with_actions(#actions)
        }
    }
}
