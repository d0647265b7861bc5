//! Procedural macros for the tickbus event engine.
//!
//! - `#[derive(EventKind)]`: maps a field-less enum onto `tickbus::EventType`
//!   ids (variant position) and implements `tickbus::Label` with the variant name.
//!
//! Usage:
//! ```rust,ignore
//! use tickbus::EventKind;
//!
//! #[derive(Clone, Copy, Debug, EventKind)]
//! enum Kind { Spawn, Tick, Despawn }
//!
//! engine.publish(Kind::Tick, None)?;
//! ```
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `From<Self> for tickbus::EventType` and `tickbus::Label`.
///
/// Every variant must be a unit variant. The n-th variant (in declaration
/// order, explicit discriminants are ignored) becomes event type `n`.
#[proc_macro_derive(EventKind)]
pub fn derive_event_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = input.ident.clone();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let data_enum = match &input.data {
        Data::Enum(data_enum) => data_enum,
        _ => {
            return syn::Error::new_spanned(&input.ident, "EventKind can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    if let Some(variant) = data_enum
        .variants
        .iter()
        .find(|v| !matches!(v.fields, Fields::Unit))
    {
        return syn::Error::new_spanned(variant, "EventKind variants must not carry fields")
            .to_compile_error()
            .into();
    }

    let id_arms = data_enum.variants.iter().enumerate().map(|(index, variant)| {
        let variant_ident = &variant.ident;
        let index = index as u32;
        quote! { #ident::#variant_ident => #index }
    });

    let label_arms = data_enum.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let variant_name = variant_ident.to_string();
        quote! { Self::#variant_ident => ::std::borrow::Cow::Borrowed(#variant_name) }
    });

    let expanded = quote! {
        impl #impl_generics ::core::convert::From<#ident #ty_generics> for tickbus::EventType #where_clause {
            fn from(kind: #ident #ty_generics) -> Self {
                tickbus::EventType::new(match kind {
                    #(#id_arms),*
                })
            }
        }

        impl #impl_generics tickbus::Label for #ident #ty_generics #where_clause {
            fn label(&self) -> ::std::borrow::Cow<'static, str> {
                match self {
                    #(#label_arms),*
                }
            }
        }
    };
    TokenStream::from(expanded)
}
