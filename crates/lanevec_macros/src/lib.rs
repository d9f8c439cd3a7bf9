//! Internal proc-macros for lanevec per-lane operator implementations.
//!
//! Every operator on `FixedVector` has the same shape: either run a lane
//! function over each lane (or pair of lanes), or apply the operator to the
//! whole untyped register. This crate generates those impls from one line per
//! operator.
//!
//! This crate is internal to lanevec and not intended for external use.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Ident, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// How an operator reaches the data.
enum Mode {
    /// Calls `T::<lane_fn>` on each lane.
    Lanes(Ident),
    /// Applies the operator to the raw `Register`.
    Register,
}

/// Arguments for the lane_operator! macro.
/// Format: lane_operator!(Trait, method[, AssignTrait, assign_method] => lanes lane_fn | register)
struct LaneOperatorArgs {
    trait_name: Ident,
    method: Ident,
    assign: Option<(Ident, Ident)>,
    mode: Mode,
}

impl Parse for LaneOperatorArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let trait_name: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let method: Ident = input.parse()?;

        let assign = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let assign_trait: Ident = input.parse()?;
            input.parse::<Token![,]>()?;
            let assign_method: Ident = input.parse()?;
            Some((assign_trait, assign_method))
        } else {
            None
        };

        input.parse::<Token![=>]>()?;
        let mode_ident: Ident = input.parse()?;
        let mode = match mode_ident.to_string().as_str() {
            "lanes" => Mode::Lanes(input.parse()?),
            "register" => Mode::Register,
            _ => {
                return Err(syn::Error::new(
                    mode_ident.span(),
                    "expected `lanes <lane_fn>` or `register`",
                ));
            }
        };

        Ok(Self {
            trait_name,
            method,
            assign,
            mode,
        })
    }
}

/// Generates a `std::ops` impl (and optionally its `*Assign` twin) for `FixedVector<T>`.
///
/// # Usage
/// ```ignore
/// lane_operator!(Add, add, AddAssign, add_assign => lanes lane_add);
/// lane_operator!(BitAnd, bitand, BitAndAssign, bitand_assign => register);
/// lane_operator!(Not, not => register);
/// ```
///
/// Without an assign pair the operator is unary.
#[proc_macro]
pub fn lane_operator(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as LaneOperatorArgs);
    let trait_name = &args.trait_name;
    let method = &args.method;

    let expanded = match &args.assign {
        Some((assign_trait, assign_method)) => {
            let body = binary_body(&args.mode, trait_name, method);
            quote! {
                impl<T: crate::Lane> ::std::ops::#trait_name for crate::FixedVector<T> {
                    type Output = Self;

                    #[inline]
                    fn #method(self, rhs: Self) -> Self::Output {
                        #body
                    }
                }

                impl<T: crate::Lane> ::std::ops::#assign_trait for crate::FixedVector<T> {
                    #[inline]
                    fn #assign_method(&mut self, rhs: Self) {
                        *self = ::std::ops::#trait_name::#method(*self, rhs);
                    }
                }
            }
        }
        None => {
            let body = unary_body(&args.mode, trait_name, method);
            quote! {
                impl<T: crate::Lane> ::std::ops::#trait_name for crate::FixedVector<T> {
                    type Output = Self;

                    #[inline]
                    fn #method(self) -> Self::Output {
                        #body
                    }
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn binary_body(mode: &Mode, trait_name: &Ident, method: &Ident) -> TokenStream2 {
    match mode {
        Mode::Lanes(lane_fn) => quote! {
            self.zip_lanes(rhs, <T as crate::Lane>::#lane_fn)
        },
        Mode::Register => quote! {
            Self::from_raw(::std::ops::#trait_name::#method(
                self.into_register(),
                rhs.into_register(),
            ))
        },
    }
}

fn unary_body(mode: &Mode, trait_name: &Ident, method: &Ident) -> TokenStream2 {
    match mode {
        Mode::Lanes(lane_fn) => quote! {
            self.map_lanes(<T as crate::Lane>::#lane_fn)
        },
        Mode::Register => quote! {
            Self::from_raw(::std::ops::#trait_name::#method(self.into_register()))
        },
    }
}
