use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, LitStr, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[entity_id] 宏实现
/// 仅支持单字段 tuple struct，并为包装类型：
/// - 合并/追加派生：Default, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord
/// - 提供 new/value、Display、FromStr、AsRef 与双向 From
/// - 配置了 `tag` 时实现 `::factory_domain::identity::Identity`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityIdAttrConfig);
    let input = parse_macro_input!(item as Item);

    let st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f.unnamed[0].ty.clone(),
        syn::Fields::Unnamed(f) => {
            return syn::Error::new(
                f.span(),
                "#[entity_id] requires a tuple struct with exactly one field",
            )
            .to_compile_error()
            .into();
        }
        _ => {
            return syn::Error::new(
                st.span(),
                "#[entity_id] supports only tuple struct, e.g., struct X(i64);",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
        syn::parse_quote!(PartialOrd),
        syn::parse_quote!(Ord),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }

    let mut st_out = st.clone();
    apply_derives(&mut st_out.attrs, required);

    let ident = &st_out.ident;
    let (impl_generics, ty_generics, where_clause) = st_out.generics.split_for_impl();

    // 带标签与不带标签的 Display/FromStr 形态不同
    let text_impls = match &cfg.tag {
        Some(tag) => quote! {
            impl #impl_generics ::factory_domain::identity::Identity for #ident #ty_generics #where_clause {
                const TAG: &'static str = #tag;
            }

            impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_clause
            where #inner_ty: ::std::fmt::Display
            {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::write!(f, "{}-{}", #tag, self.0)
                }
            }

            impl #impl_generics ::std::str::FromStr for #ident #ty_generics #where_clause
            where #inner_ty: ::std::str::FromStr
            {
                type Err = <#inner_ty as ::std::str::FromStr>::Err;
                fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                    let raw = s.strip_prefix(::std::concat!(#tag, "-")).unwrap_or(s);
                    let inner: #inner_ty = raw.parse()?;
                    ::std::result::Result::Ok(Self(inner))
                }
            }
        },
        None => quote! {
            impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_clause
            where #inner_ty: ::std::fmt::Display
            {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::write!(f, "{}", self.0)
                }
            }

            impl #impl_generics ::std::str::FromStr for #ident #ty_generics #where_clause
            where #inner_ty: ::std::str::FromStr
            {
                type Err = <#inner_ty as ::std::str::FromStr>::Err;
                fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                    let inner: #inner_ty = s.parse()?;
                    ::std::result::Result::Ok(Self(inner))
                }
            }
        },
    };

    let out = quote! {
        #st_out

        impl #impl_generics #ident #ty_generics #where_clause {
            pub fn new(value: #inner_ty) -> Self { Self(value) }

            pub fn value(&self) -> &#inner_ty { &self.0 }
        }

        #text_impls

        impl #impl_generics ::core::convert::AsRef<#inner_ty> for #ident #ty_generics #where_clause {
            fn as_ref(&self) -> &#inner_ty { &self.0 }
        }

        impl #impl_generics ::core::convert::From<#ident #ty_generics> for #inner_ty #where_clause {
            fn from(value: #ident #ty_generics) -> Self { value.0 }
        }

        impl #impl_generics ::core::convert::From<#inner_ty> for #ident #ty_generics #where_clause {
            fn from(value: #inner_ty) -> Self { Self(value) }
        }
    };

    TokenStream::from(out)
}

// -------- parsing --------

struct EntityIdAttrConfig {
    tag: Option<LitStr>,
    derive_debug: Option<bool>,
}

impl Parse for EntityIdAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            tag: None,
            derive_debug: None,
        };
        if input.is_empty() {
            return Ok(cfg);
        }

        let pairs: Punctuated<EntityIdAttrElem, Token![,]> = Punctuated::parse_terminated(input)?;
        for elem in pairs {
            match elem {
                EntityIdAttrElem::Tag(tag) => {
                    if cfg.tag.is_some() {
                        return Err(syn::Error::new(tag.span(), "duplicate key 'tag' in attribute"));
                    }
                    if tag.value().is_empty() {
                        return Err(syn::Error::new(tag.span(), "'tag' must not be empty"));
                    }
                    cfg.tag = Some(tag);
                }
                EntityIdAttrElem::Debug(b) => {
                    if cfg.derive_debug.is_some() {
                        return Err(syn::Error::new(
                            proc_macro2::Span::call_site(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    cfg.derive_debug = Some(b);
                }
            }
        }
        Ok(cfg)
    }
}

enum EntityIdAttrElem {
    Tag(LitStr),
    Debug(bool),
}

impl Parse for EntityIdAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        if key == "tag" {
            Ok(Self::Tag(input.parse()?))
        } else if key == "debug" {
            let lit: syn::LitBool = input.parse()?;
            Ok(Self::Debug(lit.value()))
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'tag' or 'debug'",
            ))
        }
    }
}
