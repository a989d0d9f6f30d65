//! 聚合根编排器（AggregateRoot）
//!
//! 封装一次命令的标准流程：
//! “加载事件流 → 投影状态 → 构造聚合并执行命令 → 以加载时的版本追加新事件”。
//! 命令被拒绝时不会写入任何事件；追加遇到并发冲突时原样返回，由调用方决定是否重试。
//!
use crate::{
    aggregate::Aggregate,
    domain_event::DomainEvent,
    error::DomainResult,
    persist::EventStore,
    projection::project,
};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// 面向应用层的聚合根编排器。
///
/// - `A`：聚合类型（实现 `Aggregate`）
/// - `S`：事件存储（实现 `EventStore<A::Event>`）
pub struct AggregateRoot<A, S>
where
    A: Aggregate,
    S: EventStore<A::Event>,
{
    store: S,
    _marker: PhantomData<fn() -> A>,
}

impl<A, S> AggregateRoot<A, S>
where
    A: Aggregate,
    S: EventStore<A::Event>,
{
    /// 创建编排器实例
    pub fn new(store: S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 在指定聚合上执行一次命令，返回本次追加的事件
    pub async fn update<F>(
        &self,
        id: &<A::Event as DomainEvent>::Id,
        action: F,
    ) -> DomainResult<Vec<A::Event>>
    where
        F: FnOnce(&mut A) -> DomainResult<()> + Send,
    {
        let stream = self.store.load_stream(id).await?;
        debug!(
            aggregate = A::TYPE,
            stream = %id,
            version = %stream.version,
            events = stream.events.len(),
            "stream loaded"
        );

        let mut aggregate = A::from_state(project::<A::State>(&stream.events));

        if let Err(err) = action(&mut aggregate) {
            debug!(aggregate = A::TYPE, stream = %id, code = err.code(), "command rejected");
            return Err(err);
        }

        let changes = aggregate.into_changes();
        let appended = changes.clone();

        match self.store.append(id, stream.version, changes).await {
            Ok(version) => {
                debug!(
                    aggregate = A::TYPE,
                    stream = %id,
                    %version,
                    appended = appended.len(),
                    "events appended"
                );
                Ok(appended)
            }
            Err(err) => {
                if err.is_concurrency_conflict() {
                    warn!(aggregate = A::TYPE, stream = %id, error = %err, "append conflicted");
                }
                Err(err)
            }
        }
    }
}
