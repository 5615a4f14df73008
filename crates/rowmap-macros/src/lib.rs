extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowmap::Materialize` for a struct with named fields.
///
/// Every field type must implement `rowmap::Primitive` and the struct must
/// implement `Default`. Field attributes:
///
/// * `#[column("Alias")]` binds the field to a differently named column.
/// * `#[actions(read)]` / `#[actions(write)]` limits the mapping directions
///   the field takes part in.
/// * `#[skip]` leaves the field out of the mapping.
///
/// `#[materialize(rename_all = "PascalCase")]` on the struct derives default
/// aliases from field names.
#[proc_macro_derive(Materialize, attributes(column, actions, skip, materialize))]
pub fn derive_materialize(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
