use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::{punctuated::Punctuated, Token};

/// Turn a struct with named channel fields into a color model.
///
/// Every field becomes public and the common derives are added, except
/// those the struct already derives itself. The generated `Model` impl lists
/// the channels in declaration order, which is the canonical order used for
/// ratios and reports.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let syn::Fields::Named(ref named) = input.fields else {
        return quote! {
            compile_error!("Models must use named fields, one for each channel.");
        }
        .into();
    };

    let Some(first) = named.named.first() else {
        return quote! {
            compile_error!("Models must have at least one channel.");
        }
        .into();
    };

    let value_type = first.ty.clone();
    if named.named.iter().any(|f| f.ty != value_type) {
        return quote! {
            compile_error!("All channels of a model must share one value type.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let field_names = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let channel_names = field_names
        .iter()
        .map(|f| f.to_string().to_case(Case::Title))
        .collect::<Vec<_>>();
    let channel_count = field_names.len();

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let listed = input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .filter_map(|path| path.segments.last().map(|s| s.ident.to_string()))
        .collect::<Vec<_>>();

    let common: [syn::Path; 5] = [
        syn::parse_quote!(Clone),
        syn::parse_quote!(Copy),
        syn::parse_quote!(Debug),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
    ];
    let derives = common
        .into_iter()
        .filter(|path| {
            path.segments
                .last()
                .map_or(true, |s| !listed.contains(&s.ident.to_string()))
        })
        .collect::<Vec<_>>();

    if !derives.is_empty() {
        let attr: syn::Attribute = syn::parse_quote! {
            #[derive(#(#derives),*)]
        };
        input.attrs.push(attr);
    }

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new value of this model from its channels.
            pub fn new(#(#field_names: #value_type),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the channels in canonical order.
            pub fn to_array(&self) -> [#value_type; #channel_count] {
                [#(self.#field_names),*]
            }
        }

        impl From<[#value_type; #channel_count]> for #struct_name {
            fn from(value: [#value_type; #channel_count]) -> Self {
                let [#(#field_names),*] = value;
                Self::new(#(#field_names),*)
            }
        }

        impl crate::models::Model for #struct_name {
            type Value = #value_type;

            const CHANNELS: &'static [&'static str] = &[#(#channel_names),*];

            fn values(&self) -> Vec<Self::Value> {
                self.to_array().to_vec()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
