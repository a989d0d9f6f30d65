use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq
/// - 参数：`debug = false` 不派生 Debug；`default = false` 不派生 Default
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = Vec::new();
    if cfg.derive_debug.unwrap_or(true) {
        required.push(syn::parse_quote!(Debug));
    }
    if cfg.derive_default.unwrap_or(true) {
        required.push(syn::parse_quote!(Default));
    }
    let common: [syn::Path; 5] = [
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
    ];
    required.extend(common);

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            TokenStream::from(quote! { #st })
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}

// -------- parsing --------

struct ValueObjectAttrConfig {
    derive_debug: Option<bool>,
    derive_default: Option<bool>,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            derive_debug: None,
            derive_default: None,
        };
        if input.is_empty() {
            return Ok(cfg);
        }

        let pairs: Punctuated<ValueObjectAttrElem, Token![,]> =
            Punctuated::parse_terminated(input)?;
        for ValueObjectAttrElem { key, value } in pairs {
            let slot = if key == "debug" {
                &mut cfg.derive_debug
            } else {
                &mut cfg.derive_default
            };
            if slot.is_some() {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate key '{key}' in attribute"),
                ));
            }
            *slot = Some(value);
        }
        Ok(cfg)
    }
}

struct ValueObjectAttrElem {
    key: syn::Ident,
    value: bool,
}

impl Parse for ValueObjectAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        if key != "debug" && key != "default" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'debug' or 'default'",
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let lit: syn::LitBool = input.parse()?;
        Ok(Self {
            key,
            value: lit.value(),
        })
    }
}
