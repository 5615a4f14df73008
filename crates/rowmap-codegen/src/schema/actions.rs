use quote::quote;

mod kw {
    syn::custom_keyword!(read);
    syn::custom_keyword!(write);
}

/// `#[actions(read, write)]`: which mapping directions a property takes
/// part in. Properties take part in both when the attribute is omitted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Actions {
    pub(crate) read: bool,
    pub(crate) write: bool,
}

impl Default for Actions {
    fn default() -> Self {
        Actions {
            read: true,
            write: true,
        }
    }
}

impl Actions {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Actions> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Actions {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Actions {
            read: false,
            write: false,
        };

        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(kw::read) {
                let kw: kw::read = input.parse()?;
                if result.read {
                    return Err(syn::Error::new(kw.span, "duplicate `read` action"));
                }
                result.read = true;
            } else if lookahead.peek(kw::write) {
                let kw: kw::write = input.parse()?;
                if result.write {
                    return Err(syn::Error::new(kw.span, "duplicate `write` action"));
                }
                result.write = true;
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

impl Actions {
    pub(crate) fn to_tokens(self, support: &proc_macro2::TokenStream) -> proc_macro2::TokenStream {
        match (self.read, self.write) {
            (true, true) => quote!(#support::Actions::ALL),
            (true, false) => quote!(#support::Actions::READ),
            (false, true) => quote!(#support::Actions::WRITE),
            (false, false) => quote!(#support::Actions::NONE),
        }
    }
}
