//! Procedural macros for fakeit.
//!
//! `#[derive(EventArgs)]` implements `fakeit::EventArgs` for your type, preserving
//! generics and bounds. The name used in log output defaults to the type name;
//! override it with `#[event_args(name = "...")]`.
//!
//! ```rust,ignore
//! use fakeit::EventArgs;
//!
//! #[derive(EventArgs)]
//! #[event_args(name = "saved")]
//! struct SavedArgs { path: String }
//! ```
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, parse_macro_input};

#[proc_macro_derive(EventArgs, attributes(event_args))]
pub fn derive_event_args(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let mut name: Option<LitStr> = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("event_args")) {
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                name = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        });
        if let Err(e) = parsed {
            return e.to_compile_error().into();
        }
    }

    let ident = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let name_impl = name.map(|name| {
        quote! {
            fn name(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#name)
            }
        }
    });

    let expanded = quote! {
        impl #impl_generics ::fakeit::EventArgs for #ident #ty_generics #where_clause {
            #name_impl
        }
    };

    TokenStream::from(expanded)
}
