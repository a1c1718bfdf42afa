use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    Data, DeriveInput, Fields, GenericParam, Generics, Lifetime, LifetimeParam, Type,
    parse_macro_input, parse_quote,
};

/// One variant of the derived enum: its name and its single payload type.
struct Alternative {
    variant: syn::Ident,
    payload: Type,
}

fn alternatives(input: &DeriveInput) -> syn::Result<Vec<Alternative>> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`Shape` can only be derived for enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`Shape` needs at least one variant: an empty enum has no alternative to inspect",
        ));
    }

    let mut seen: Vec<(String, &Type)> = Vec::with_capacity(data.variants.len());
    let mut alternatives = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let payload = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "every variant must carry exactly one unnamed payload, e.g. `Number(i64)`",
                ));
            }
        };

        // Alternatives are located by type, so two variants cannot share a payload type.
        let key = quote!(#payload).to_string();
        if let Some((_, first)) = seen.iter().find(|(other, _)| *other == key) {
            let mut error = syn::Error::new_spanned(
                payload,
                format!("payload type `{key}` is already carried by another variant"),
            );
            error.combine(syn::Error::new_spanned(first, "first used here"));
            return Err(error);
        }
        seen.push((key, payload));

        alternatives.push(Alternative {
            variant: variant.ident.clone(),
            payload: payload.clone(),
        });
    }
    Ok(alternatives)
}

/// Nested coproduct type over the given alternative types.
fn coproduct_type(payloads: &[TokenStream2]) -> TokenStream2 {
    payloads.iter().rev().fold(
        quote!(::hyadt::coproduct::Void),
        |tail, head| quote!(::hyadt::coproduct::Coproduct<#head, #tail>),
    )
}

/// Match arms injecting each variant's payload at its position.
fn injection_arms(name: &syn::Ident, alternatives: &[Alternative]) -> Vec<TokenStream2> {
    alternatives
        .iter()
        .enumerate()
        .map(|(position, alternative)| {
            let variant = &alternative.variant;
            let mut injected = quote!(::hyadt::coproduct::Coproduct::Inl(payload));
            for _ in 0..position {
                injected = quote!(::hyadt::coproduct::Coproduct::Inr(#injected));
            }
            quote!(#name::#variant(payload) => #injected,)
        })
        .collect()
}

/// Generics of the derived type with the borrow lifetime `'__shape` in front, outliving every
/// parameter.
fn borrowed_generics(generics: &Generics, lifetime: &Lifetime) -> Generics {
    let mut borrowed = generics.clone();
    let mut bounds = Vec::new();
    for param in &generics.params {
        match param {
            GenericParam::Type(ty) => {
                let ident = &ty.ident;
                bounds.push(quote!(#ident: #lifetime));
            }
            GenericParam::Lifetime(outer) => {
                let outer = &outer.lifetime;
                bounds.push(quote!(#outer: #lifetime));
            }
            GenericParam::Const(_) => {}
        }
    }
    borrowed.params.insert(
        0,
        GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())),
    );
    let where_clause = borrowed.make_where_clause();
    for bound in bounds {
        where_clause.predicates.push(parse_quote!(#bound));
    }
    borrowed
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let alternatives = alternatives(&input)?;
    let name = &input.ident;
    let arms = injection_arms(name, &alternatives);
    let lifetime = Lifetime::new("'__shape", Span::call_site());

    let owned = coproduct_type(
        &alternatives
            .iter()
            .map(|alternative| {
                let payload = &alternative.payload;
                quote!(#payload)
            })
            .collect::<Vec<_>>(),
    );
    let shared = coproduct_type(
        &alternatives
            .iter()
            .map(|alternative| {
                let payload = &alternative.payload;
                quote!(&#lifetime #payload)
            })
            .collect::<Vec<_>>(),
    );
    let exclusive = coproduct_type(
        &alternatives
            .iter()
            .map(|alternative| {
                let payload = &alternative.payload;
                quote!(&#lifetime mut #payload)
            })
            .collect::<Vec<_>>(),
    );

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let borrowed = borrowed_generics(&input.generics, &lifetime);
    let (borrowed_impl, _, borrowed_where) = borrowed.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::hyadt::shape::Shape for #name #ty_generics #where_clause {
            const KIND: ::hyadt::shape::ShapeKind = ::hyadt::shape::ShapeKind::Union;
            type Alternatives = #owned;

            #[inline]
            fn into_alternatives(self) -> Self::Alternatives {
                match self {
                    #(#arms)*
                }
            }
        }

        impl #borrowed_impl ::hyadt::shape::Shape for &#lifetime #name #ty_generics #borrowed_where {
            const KIND: ::hyadt::shape::ShapeKind = ::hyadt::shape::ShapeKind::Union;
            type Alternatives = #shared;

            #[inline]
            fn into_alternatives(self) -> Self::Alternatives {
                match self {
                    #(#arms)*
                }
            }
        }

        impl #borrowed_impl ::hyadt::shape::Shape for &#lifetime mut #name #ty_generics #borrowed_where {
            const KIND: ::hyadt::shape::ShapeKind = ::hyadt::shape::ShapeKind::Union;
            type Alternatives = #exclusive;

            #[inline]
            fn into_alternatives(self) -> Self::Alternatives {
                match self {
                    #(#arms)*
                }
            }
        }
    })
}

/// Derive `hyadt::shape::Shape` for an enum whose variants each carry one payload.
///
/// The enum becomes a union whose alternatives are the payload types, in declaration order.
/// Payload types must be pairwise distinct. The owned, `&` and `&mut` forms are all derived.
#[proc_macro_derive(Shape)]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
