mod materialize;
mod properties;

use crate::schema::Target;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The target being expanded
    target: &'a Target,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let materialize_impl = self.expand_materialize_impl();

        wrap_in_const(quote! {
            #materialize_impl
        })
    }
}

pub(super) fn target(target: &Target) -> TokenStream {
    let rowmap = quote!(_rowmap::codegen_support);

    Expand { target, rowmap }.expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
