// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for X-Plane navigation data line records.
//!
//! This crate allows to `derive` a `Record` implementation for a struct whose
//! fields are read token by token from one line, and implements `TryFrom<&str>`
//! on the record too.
//!
//! # Example
//!
//! Deriving an implementation on a holding pattern line:
//!
//! ```ignore
//! #[derive(Record)]
//! pub struct Hold<'a> {
//!     pub fix_ident: Ident<'a>,
//!     pub region: Ident<'a>,
//!     #[navdat(skip(1))]    // Skip one token before this field
//!     pub inbound_course: f64,
//!     #[navdat(field = 9)]  // Jump to the 9th token (1-based)
//!     pub min_altitude: u32,
//!     #[navdat(rest)]       // Everything after the previous token
//!     pub name: Text<'a>,
//! }
//! ```
//!
//! Comma separated lines set the delimiter on the struct:
//!
//! ```ignore
//! #[derive(Record)]
//! #[navdat(delimiter = ',')]
//! pub struct Leg<'a> { /* ... */ }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta};

enum FieldAttribute {
    Skip(usize),
    Position(usize),
    Rest,
}

fn parse_field_attributes(field: &syn::Field) -> Option<FieldAttribute> {
    for attr in &field.attrs {
        if !attr.path().is_ident("navdat") {
            continue;
        }

        if let Ok(meta) = attr.parse_args::<Meta>() {
            match meta {
                // Handle #[navdat(skip(n))]
                Meta::List(list) if list.path.is_ident("skip") => {
                    if let Ok(Expr::Lit(ExprLit {
                        lit: Lit::Int(int_lit),
                        ..
                    })) = syn::parse2::<Expr>(list.tokens)
                    {
                        if let Ok(n) = int_lit.base10_parse::<usize>() {
                            return Some(FieldAttribute::Skip(n));
                        }
                    }
                }
                // Handle #[navdat(field = n)]
                Meta::NameValue(nv) if nv.path.is_ident("field") => {
                    if let Expr::Lit(ExprLit {
                        lit: Lit::Int(int_lit),
                        ..
                    }) = nv.value
                    {
                        if let Ok(n) = int_lit.base10_parse::<usize>() {
                            return Some(FieldAttribute::Position(n));
                        }
                    }
                }
                // Handle #[navdat(rest)]
                Meta::Path(path) if path.is_ident("rest") => {
                    return Some(FieldAttribute::Rest);
                }
                _ => {}
            }
        }
    }
    None
}

/// Returns the delimiter set by `#[navdat(delimiter = ',')]` on the struct.
fn parse_delimiter(input: &DeriveInput) -> Option<char> {
    for attr in &input.attrs {
        if !attr.path().is_ident("navdat") {
            continue;
        }

        if let Ok(Meta::NameValue(nv)) = attr.parse_args::<Meta>() {
            if nv.path.is_ident("delimiter") {
                if let Expr::Lit(ExprLit {
                    lit: Lit::Char(c), ..
                }) = nv.value
                {
                    return Some(c.value());
                }
            }
        }
    }
    None
}

/// Derive macro for implementing the `Record` trait.
///
/// Generates both the `Record` trait implementation and `TryFrom<&str>` implementation.
#[proc_macro_derive(Record, attributes(navdat))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Extract lifetime parameter (should be 'a)
    let lifetime = generics
        .lifetimes()
        .next()
        .expect("Record types must have a lifetime parameter (e.g., 'a)");

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("Record derive only supports structs with named fields"),
        },
        _ => panic!("Record derive only supports structs"),
    };

    let delimiter = match parse_delimiter(&input) {
        Some(c) => quote! { ::core::option::Option::Some(#c) },
        None => quote! { ::core::option::Option::None },
    };

    // Generate field parsing code
    let mut field_parsers = Vec::new();

    for field in fields {
        let field_name = field.ident.as_ref().unwrap();

        let parse_expr = match parse_field_attributes(field) {
            Some(FieldAttribute::Position(pos)) => {
                quote! {
                    #field_name: fields.get(#pos)?
                }
            }
            Some(FieldAttribute::Skip(n)) => {
                quote! {
                    #field_name: fields.skip(#n).next()?
                }
            }
            Some(FieldAttribute::Rest) => {
                quote! {
                    #field_name: fields.rest()
                }
            }
            None => {
                quote! {
                    #field_name: fields.next()?
                }
            }
        };

        field_parsers.push(parse_expr);
    }

    let expanded = quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #name #ty_generics #where_clause {
            const DELIMITER: ::core::option::Option<char> = #delimiter;

            fn parse(mut fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime str> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(line: &#lifetime str) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_line(line)
            }
        }
    };

    TokenStream::from(expanded)
}
