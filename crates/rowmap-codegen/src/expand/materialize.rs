use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_materialize_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.target.ident;
        let type_name = ident.to_string();
        let properties = self.expand_properties();

        quote! {
            impl #rowmap::Materialize for #ident {
                fn kind() -> #rowmap::Kind<Self> {
                    #rowmap::Kind::Complex(<Self as #rowmap::Default>::default)
                }

                fn type_name() -> &'static str {
                    #type_name
                }

                fn properties() -> #rowmap::Vec<#rowmap::Property<Self>> {
                    #properties
                }
            }
        }
    }
}
