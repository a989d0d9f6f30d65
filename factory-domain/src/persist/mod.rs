//! 持久化与事件溯源（persist）
//!
//! - 事件存储协议与加载结果（`EventStore`/`EventStream`）；
//! - 事件的存储形态及批量转换（`SerializedEvent`、`serialize_events`、`deserialize_events`）；
//! - 进程内实现（`InMemoryEventStore`），用于测试与演示。
//!
//! 其他存储后端由上层实现 `EventStore` 并注入。
//!
mod event_store;
mod inmemory_event_store;
mod serialized_event;

pub use event_store::{EventStore, EventStream};
pub use inmemory_event_store::InMemoryEventStore;
pub use serialized_event::{SerializedEvent, deserialize_events, serialize_events};
