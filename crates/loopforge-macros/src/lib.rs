//! Macros for LoopForge.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod for_constexpr;

/// Unrolls a nest of loops at compile time.
///
/// See `loopforge::for_constexpr!` for the grammar and examples.
#[proc_macro]
pub fn for_constexpr(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as for_constexpr::ForConstexpr);
    for_constexpr::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
