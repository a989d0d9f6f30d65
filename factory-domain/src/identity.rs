//! 聚合标识（Identity）
//!
//! 一个标识命名一个聚合实例及其事件流；创建后不可变、可比较。
//! 通常由 `#[entity_id(tag = "...")]` 宏实现，显示形式为 `{tag}-{value}`，
//! 该显示形式同时作为事件流的存储键。
//!
use std::{fmt, hash::Hash, str::FromStr};

/// 带类型标签的强类型标识
pub trait Identity:
    Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// 标识所属的聚合类型标签
    const TAG: &'static str;

    /// 事件流键（即 `Display` 形式）
    fn stream_id(&self) -> String {
        self.to_string()
    }
}
