//! 事件持久化模型（SerializedEvent）
//!
//! 定义事件在存储层的标准形态，以及与强类型事件之间的批量转换。
//! 反序列化时只接受事件枚举声明过的类型名，未知类型视为缺失处理分支的编程错误。
//!
use crate::{
    domain_event::DomainEvent,
    error::{DomainError, DomainResult},
    identity::Identity,
    value_object::Version,
};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct SerializedEvent {
    /// 事件唯一标识符
    event_id: String,
    /// 事件类型，用于区分不同的事件
    event_type: String,
    /// 事件流键（聚合标识的显示形式）
    stream_id: String,
    /// 聚合类型（标识标签）
    aggregate_type: String,
    /// 追加该事件后事件流的版本号，从 1 开始
    stream_position: usize,
    /// 事件发生时间
    occurred_at: DateTime<Utc>,
    /// 事件负载
    payload: Value,
}

impl SerializedEvent {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn stream_id(&self) -> &str {
        &self.stream_id
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn stream_position(&self) -> Version {
        Version::from_value(self.stream_position)
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// 将一批新事件序列化为存储形态，位置从 `after + 1` 开始连续编号
///
/// 事件所属的聚合标识必须与目标流一致，否则整批拒绝。
pub fn serialize_events<E>(
    stream: &E::Id,
    after: Version,
    events: &[E],
) -> DomainResult<Vec<SerializedEvent>>
where
    E: DomainEvent,
{
    let occurred_at = Utc::now();

    events
        .iter()
        .enumerate()
        .map(|(offset, event)| {
            if event.aggregate_id() != stream {
                return Err(DomainError::event_store(format!(
                    "event {} belongs to {}, not to stream {}",
                    event.event_type(),
                    event.aggregate_id(),
                    stream
                )));
            }

            Ok(SerializedEvent::builder()
                .event_id(Uuid::new_v4().to_string())
                .event_type(event.event_type().to_string())
                .stream_id(stream.stream_id())
                .aggregate_type(<E::Id as Identity>::TAG.to_string())
                .stream_position(after.advance(offset + 1).value())
                .occurred_at(occurred_at)
                .payload(serde_json::to_value(event)?)
                .build())
        })
        .collect()
}

/// 将存储形态还原为强类型事件，保持原有顺序
pub fn deserialize_events<E>(records: &[SerializedEvent]) -> DomainResult<Vec<E>>
where
    E: DomainEvent,
{
    records
        .iter()
        .map(|record| {
            if !E::is_known_type(record.event_type()) {
                return Err(DomainError::UnhandledEventType {
                    event_type: record.event_type().to_string(),
                });
            }

            let event: E = serde_json::from_value(record.payload.clone())?;
            if event.event_type() != record.event_type() {
                return Err(DomainError::event_store(format!(
                    "event type mismatch at {}#{}: recorded={}, payload={}",
                    record.stream_id,
                    record.stream_position,
                    record.event_type(),
                    event.event_type()
                )));
            }

            Ok(event)
        })
        .collect()
}
