use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Ident, LitStr};

/// Turns an error code literal (`"E012"`) into a unit constant with the same name.
///
/// Two errors declared with the same code in one module then fail to compile
/// with a duplicate definition.
#[proc_macro]
pub fn error_code_to_ident(input: TokenStream) -> TokenStream {
    let code = parse_macro_input!(input as LitStr);
    let value = code.value();

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return syn::Error::new(code.span(), "error codes must be ascii alphanumeric")
            .to_compile_error()
            .into();
    }

    if value.starts_with(|c: char| c.is_ascii_digit()) {
        return syn::Error::new(code.span(), "error codes must not start with a digit")
            .to_compile_error()
            .into();
    }

    let ident = Ident::new(&format!("__ERROR_CODE_{value}"), Span::call_site());

    quote! {
        #[allow(dead_code, non_upper_case_globals)]
        const #ident: () = ();
    }
    .into()
}
