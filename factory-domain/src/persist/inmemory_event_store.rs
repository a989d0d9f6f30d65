//! 内存事件存储
//!
//! 事件以 `SerializedEvent` 形态按流键保存，读写路径与持久化后端一致地经过序列化。
//!
use crate::{
    domain_event::DomainEvent,
    error::{DomainError, DomainResult},
    identity::Identity,
    persist::{EventStore, EventStream, SerializedEvent, deserialize_events, serialize_events},
    value_object::Version,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};
use tracing::trace;

pub struct InMemoryEventStore<E> {
    // stream_id -> 事件列表
    streams: Mutex<HashMap<String, Vec<SerializedEvent>>>,
    _marker: PhantomData<fn() -> E>,
}

impl<E> Default for InMemoryEventStore<E> {
    fn default() -> Self {
        Self {
            streams: Mutex::new(HashMap::new()),
            _marker: PhantomData,
        }
    }
}

impl<E> InMemoryEventStore<E>
where
    E: DomainEvent,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// 某条流已保存的原始记录
    pub fn records(&self, id: &E::Id) -> DomainResult<Vec<SerializedEvent>> {
        let streams = self.lock()?;
        Ok(streams.get(&id.stream_id()).cloned().unwrap_or_default())
    }

    /// 当前保存的流数量
    pub fn stream_count(&self) -> DomainResult<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, HashMap<String, Vec<SerializedEvent>>>> {
        self.streams
            .lock()
            .map_err(|_| DomainError::event_store("in-memory event store lock poisoned"))
    }
}

#[async_trait]
impl<E> EventStore<E> for InMemoryEventStore<E>
where
    E: DomainEvent,
{
    async fn load_stream(&self, id: &E::Id) -> DomainResult<EventStream<E>> {
        let records = self.records(id)?;
        let events = deserialize_events::<E>(&records)?;

        trace!(stream = %id, count = events.len(), "stream loaded");

        Ok(EventStream {
            version: Version::from_value(records.len()),
            events,
        })
    }

    async fn append(
        &self,
        id: &E::Id,
        expected_version: Version,
        events: Vec<E>,
    ) -> DomainResult<Version> {
        let serialized = serialize_events(id, expected_version, &events)?;

        let stream_id = id.stream_id();
        let mut streams = self.lock()?;

        let actual = Version::from_value(streams.get(&stream_id).map_or(0, Vec::len));
        if actual != expected_version {
            return Err(DomainError::ConcurrencyConflict {
                stream: stream_id,
                expected: expected_version,
                actual,
            });
        }

        if !serialized.is_empty() {
            streams.entry(stream_id).or_default().extend(serialized);
        }
        let version = expected_version.advance(events.len());

        trace!(stream = %id, appended = events.len(), %version, "events appended");

        Ok(version)
    }
}
