use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, parse_macro_input, parse_quote};

/// Implements `lanevec::Lane` for a single-field tuple struct by delegating to
/// the field's type.
///
/// The struct must also be `Copy + Debug`. Generic newtypes get a `Lane` bound
/// on the field type.
#[proc_macro_derive(Lane)]
pub fn derive_lane(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;

    let inner_type = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Unnamed(fields),
            ..
        }) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "Lane can only be derived for single-field tuple structs",
            )
            .to_compile_error()
            .into();
        }
    };

    // Generic newtypes need the field type bounded
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#inner_type: ::lanevec::Lane));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::lanevec::Lane for #struct_name #ty_generics #where_clause {
            const KIND: ::lanevec::LaneKind = <#inner_type as ::lanevec::Lane>::KIND;
            const SIZE: usize = <#inner_type as ::lanevec::Lane>::SIZE;
            const ZERO: Self = Self(<#inner_type as ::lanevec::Lane>::ZERO);
            const ONE: Self = Self(<#inner_type as ::lanevec::Lane>::ONE);

            #[inline]
            fn read_lane(bytes: &[u8]) -> Self {
                Self(<#inner_type as ::lanevec::Lane>::read_lane(bytes))
            }

            #[inline]
            fn write_lane(&self, dst: &mut [u8]) {
                ::lanevec::Lane::write_lane(&self.0, dst)
            }

            #[inline]
            fn lane_eq(&self, other: &Self) -> bool {
                ::lanevec::Lane::lane_eq(&self.0, &other.0)
            }

            #[inline]
            fn lane_hash(&self) -> u32 {
                ::lanevec::Lane::lane_hash(&self.0)
            }

            #[inline]
            fn to_scalar(&self) -> ::lanevec::Scalar {
                ::lanevec::Lane::to_scalar(&self.0)
            }

            #[inline]
            fn lane_add(self, rhs: Self) -> Self {
                Self(::lanevec::Lane::lane_add(self.0, rhs.0))
            }

            #[inline]
            fn lane_sub(self, rhs: Self) -> Self {
                Self(::lanevec::Lane::lane_sub(self.0, rhs.0))
            }

            #[inline]
            fn lane_mul(self, rhs: Self) -> Self {
                Self(::lanevec::Lane::lane_mul(self.0, rhs.0))
            }
        }
    };

    TokenStream::from(expanded)
}
