//! Procedural macros for the aoc24-core puzzle framework

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro generating the `Puzzle` impl from `PuzzlePart` impls
///
/// Reads the declared part count and generates a `run_part` that dispatches
/// to `PuzzlePart<1>` through `PuzzlePart<N>`, so the dispatch table never
/// drifts from the implemented parts.
///
/// # Attributes
///
/// - `parts`: Required. The number of parts this puzzle implements.
///
/// # Requirements
///
/// The type must implement `PuzzlePart<N>` for every part 1..=N. A missing
/// part impl surfaces as a compile-time trait bound error on the generated
/// dispatch arm.
///
/// # Example
///
/// ```ignore
/// use aoc24_core::{Puzzle, PuzzleParser, PuzzlePart};
///
/// #[derive(Puzzle)]
/// #[puzzle(parts = 2)]
/// struct Solver;
///
/// impl PuzzleParser for Solver { /* ... */ }
/// impl PuzzlePart<1> for Solver { /* ... */ }
/// impl PuzzlePart<2> for Solver { /* ... */ }
/// ```
#[proc_macro_derive(Puzzle, attributes(puzzle))]
pub fn derive_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let puzzle_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("Puzzle derive macro requires #[puzzle(parts = N)] attribute");

    let mut parts: Option<u8> = None;

    puzzle_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("parts") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    parts = Some(lit_int.base10_parse()?);
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[puzzle(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");

    // One dispatch arm per declared part
    let arms = (1..=parts).map(|n| {
        quote! {
            #n => <#name as ::aoc24_core::PuzzlePart<#n>>::solve(input),
        }
    });

    let expanded = quote! {
        impl ::aoc24_core::Puzzle for #name {
            const PARTS: u8 = #parts;

            fn run_part(
                input: &mut <Self as ::aoc24_core::PuzzleParser>::Input<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc24_core::SolveError> {
                match part {
                    #(#arms)*
                    other => ::core::result::Result::Err(
                        ::aoc24_core::SolveError::PartNotImplemented(other),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering puzzles with the plugin system
///
/// Generates the `inventory` submission that lets
/// `RegistryBuilder::register_all_plugins` discover the solver at runtime.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2024)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid"])
///
/// # Requirements
///
/// The type must implement the `Puzzle` trait (usually via
/// `#[derive(Puzzle)]`). If it doesn't, the generated bound check produces a
/// clear compile-time error.
///
/// # Example
///
/// ```ignore
/// use aoc24_core::{Puzzle, RegisterPuzzle};
///
/// #[derive(Puzzle, RegisterPuzzle)]
/// #[puzzle(parts = 2)]
/// #[register(year = 2024, day = 5, tags = ["ordering"])]
/// struct Solver;
/// ```
#[proc_macro_derive(RegisterPuzzle, attributes(register))]
pub fn derive_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let register_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("register"))
        .expect("RegisterPuzzle derive macro requires #[register(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    register_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[register(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Puzzle trait,
        // with a clearer error message than a failed inventory submission
        const _: () = {
            trait MustImplementPuzzle: ::aoc24_core::Puzzle {}
            impl MustImplementPuzzle for #name {}
        };

        ::aoc24_core::inventory::submit! {
            ::aoc24_core::PuzzlePlugin {
                year: #year,
                day: #day,
                puzzle: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
