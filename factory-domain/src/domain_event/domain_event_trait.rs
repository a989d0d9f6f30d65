use crate::identity::Identity;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
///
/// 事件类型集合是封闭的（通常为一个枚举），`EVENT_TYPES` 列出全部稳定的类型名，
/// 反序列化时据此拒绝未知类型。
pub trait DomainEvent:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// 所属聚合的标识类型
    type Id: Identity;

    /// 全部已知的事件类型名
    const EVENT_TYPES: &'static [&'static str];

    /// 事件类型名（稳定，不随重构变化）
    fn event_type(&self) -> &'static str;

    /// 事件所属的聚合标识
    fn aggregate_id(&self) -> &Self::Id;

    fn is_known_type(event_type: &str) -> bool {
        Self::EVENT_TYPES.contains(&event_type)
    }
}
