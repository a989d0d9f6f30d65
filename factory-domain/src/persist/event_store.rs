//! 事件存储（EventStore）协议
//!
//! 按聚合标识保存事件流，追加时以期望版本做乐观并发校验。
//!
use crate::{domain_event::DomainEvent, error::DomainResult, value_object::Version};
use async_trait::async_trait;
use std::sync::Arc;

/// 一次加载得到的事件流
#[derive(Debug, Clone, PartialEq)]
pub struct EventStream<E> {
    /// 流版本，等于流中事件数量；不存在的流为 `Version::new()`
    pub version: Version,
    /// 按追加顺序排列的全部事件
    pub events: Vec<E>,
}

impl<E> EventStream<E> {
    pub fn empty() -> Self {
        Self {
            version: Version::new(),
            events: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<E> Default for EventStream<E> {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
pub trait EventStore<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 加载整条事件流；流不存在时返回空流而非错误
    async fn load_stream(&self, id: &E::Id) -> DomainResult<EventStream<E>>;

    /// 在 `expected_version` 处追加事件，返回新版本
    ///
    /// 实际版本不等于期望版本时返回 `DomainError::ConcurrencyConflict`，且事件流保持不变。
    /// 追加是原子的：要么全部写入，要么一个都不写。
    async fn append(
        &self,
        id: &E::Id,
        expected_version: Version,
        events: Vec<E>,
    ) -> DomainResult<Version>;
}

#[async_trait]
impl<E, T> EventStore<E> for Arc<T>
where
    E: DomainEvent,
    T: EventStore<E> + ?Sized,
{
    async fn load_stream(&self, id: &E::Id) -> DomainResult<EventStream<E>> {
        (**self).load_stream(id).await
    }

    async fn append(
        &self,
        id: &E::Id,
        expected_version: Version,
        events: Vec<E>,
    ) -> DomainResult<Version> {
        (**self).append(id, expected_version, events).await
    }
}
