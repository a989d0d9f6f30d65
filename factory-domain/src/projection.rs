//! 状态投影（Projection）
//!
//! 当前状态从不直接存储，而是由事件流自零值状态起按顺序左折叠得到。
//! 每个事件变体在 `mutate` 中恰有一个处理分支；由于事件是封闭枚举，
//! 缺失的分支会在编译期被穷尽性检查发现。
//!
use crate::domain_event::DomainEvent;
use std::fmt;

/// 可由事件投影得到的聚合状态
pub trait AggregateState: Default + Clone + PartialEq + fmt::Debug + Send + Sync {
    type Event: DomainEvent;

    /// 将单个事件应用到状态上；状态字段只允许在此处被修改
    fn mutate(&mut self, event: &Self::Event);
}

/// 自零值状态起，按流顺序折叠全部事件
pub fn project<'a, S>(events: impl IntoIterator<Item = &'a S::Event>) -> S
where
    S: AggregateState,
{
    events.into_iter().fold(S::default(), |mut state, event| {
        state.mutate(event);
        state
    })
}
