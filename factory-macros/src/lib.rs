//! 领域建模过程宏（factory-macros）
//!
//! - `#[entity_id]`：为单字段 tuple struct 生成强类型标识（可选 `tag`，实现 `Identity`）
//! - `#[value_object]`：为值对象合并统一的派生集合
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;
mod value_object;

/// 强类型标识宏
///
/// 参数：
/// - `tag = "factory"`：为标识附加类型标签，并实现 `::factory_domain::identity::Identity`，
///   `Display` 输出形如 `factory-42`，`FromStr` 同时接受带标签与不带标签的形式；
/// - `debug = false`：不自动派生 `Debug`（由调用方手写）。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏
///
/// 合并/追加派生：Debug（可关闭）、Default、Clone、Serialize、Deserialize、PartialEq、Eq
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
