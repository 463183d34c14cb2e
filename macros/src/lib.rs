//! Derive macros for reducer actions
//!
//! This crate provides procedural macros to reduce boilerplate when writing
//! action enums for `todos-core` reducers.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `todos_core::action::Action` for an enum
//!
//! # Example
//!
//! ```ignore
//! use todos_core::action::Action as _;
//! use todos_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     Create { text: String },
//!     #[action(name = "TOGGLE")]
//!     ToggleDone { id: u64 },
//! }
//!
//! assert_eq!(TodoAction::Create { text: "x".into() }.kind(), "CREATE");
//! assert_eq!(TodoAction::ToggleDone { id: 1 }.kind(), "TOGGLE");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro for action enums
///
/// Implements `todos_core::action::Action`. Each variant's kind is its
/// identifier in `SCREAMING_SNAKE_CASE` unless overridden, and `KINDS`
/// lists them in declaration order.
///
/// # Attributes
///
/// - `#[action(name = "...")]` - Use an explicit kind name for a variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(..)]` attribute has an unknown key or a non-string value
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(
            &input,
            "#[derive(Action)] can only be used on enums"
        )
        .to_compile_error()
        .into();
    };

    let mut kind_arms = Vec::with_capacity(data_enum.variants.len());
    let mut kinds = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let kind = match kind_override(&variant.attrs) {
            Ok(Some(kind)) => kind,
            Ok(None) => screaming_snake_case(&variant_name.to_string()),
            Err(error) => return error.to_compile_error().into(),
        };

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Unit => quote! { Self::#variant_name },
        };
        kind_arms.push(quote! { #pattern => #kind, });
        kinds.push(kind);
    }

    // Uninhabited enums still need a body that type-checks
    let body = if kind_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#kind_arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::todos_core::action::Action for #name #ty_generics #where_clause {
            const KINDS: &'static [&'static str] = &[#(#kinds),*];

            fn kind(&self) -> &'static str {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(name = "...")]` from a variant's attributes
fn kind_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut kind = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                kind = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `name`"))
            }
        })?;
    }

    Ok(kind)
}

/// `ToggleDone` → `TOGGLE_DONE`, `HTTPRequest` → `HTTP_REQUEST`
fn screaming_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }

    out
}
