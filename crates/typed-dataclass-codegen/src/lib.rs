// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// `#[derive(TypedFields)]` macro: generates the value class for a struct
/// plus `TypedFields` and `FieldType` impls.
///
/// Supports named-field structs whose fields are `bool`, `i64`, `f64`,
/// `String`, or another `#[derive(TypedFields)]` struct (nested as a
/// class-typed field).
///
/// The class is named after the struct unless overridden with
/// `#[typed(name = "...")]`.
///
/// Example:
/// ```ignore
/// use typed_dataclass::TypedFields;
///
/// #[derive(TypedFields)]
/// struct Pixel {
///     x: i64,
///     y: i64,
/// }
///
/// #[derive(TypedFields)]
/// #[typed(name = "Sprite")]
/// struct SpriteRecord {
///     origin: Pixel,
///     scale: f64,
///     name: String,
/// }
/// ```
#[proc_macro_derive(TypedFields, attributes(typed))]
pub fn derive_typed_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Expansion of `#[derive(TypedFields)]` for one struct.
fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Generic structs are not supported",
        ));
    }

    let class_name = class_name(input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Only named fields are supported",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(input, "Only structs are supported")),
    };

    let mut field_names = Vec::new();
    let mut field_strs = Vec::new();
    let mut field_types = Vec::new();
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        field_names.push(field_name.clone());
        field_strs.push(field_name.to_string());
        field_types.push(field.ty.clone());
    }

    Ok(quote! {
        impl ::typed_dataclass::TypedFields for #name {
            fn value_class() -> ::std::sync::Arc<::typed_dataclass::ValueClass> {
                static CLASS: ::std::sync::OnceLock<::std::sync::Arc<::typed_dataclass::ValueClass>> =
                    ::std::sync::OnceLock::new();
                CLASS
                    .get_or_init(|| {
                        ::typed_dataclass::ValueClass::builder(#class_name)
                            #(.field_of::<#field_types>(#field_strs))*
                            .build()
                    })
                    .clone()
            }

            fn into_instance(self) -> ::typed_dataclass::Result<::typed_dataclass::Instance> {
                let args = ::typed_dataclass::Args::new()
                    #(.arg(<#field_types as ::typed_dataclass::FieldType>::into_value(self.#field_names)?))*;
                <Self as ::typed_dataclass::TypedFields>::value_class().construct(args)
            }

            fn from_instance(
                instance: &::typed_dataclass::Instance,
            ) -> ::typed_dataclass::Result<Self> {
                ::typed_dataclass::typed::expect_class::<Self>(instance)?;
                Ok(Self {
                    #(
                        #field_names: <#field_types as ::typed_dataclass::FieldType>::from_value(
                            instance.get(#field_strs)?,
                        )?,
                    )*
                })
            }
        }

        impl ::typed_dataclass::FieldType for #name {
            fn required_type() -> ::typed_dataclass::RequiredType {
                ::typed_dataclass::RequiredType::Class(
                    <Self as ::typed_dataclass::TypedFields>::value_class(),
                )
            }

            fn into_value(self) -> ::typed_dataclass::Result<::typed_dataclass::Value> {
                ::typed_dataclass::typed::nested_into_value(self)
            }

            fn from_value(
                value: &::typed_dataclass::Value,
            ) -> ::typed_dataclass::Result<Self> {
                ::typed_dataclass::typed::nested_from_value(value)
            }
        }
    })
}

/// Class name: `#[typed(name = "...")]` or the struct identifier.
fn class_name(input: &DeriveInput) -> syn::Result<String> {
    let mut class_name = input.ident.to_string();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("typed")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                class_name = lit.value();
                Ok(())
            } else {
                Err(meta.error("unsupported typed attribute, expected `name = \"...\"`"))
            }
        })?;
    }
    Ok(class_name)
}
