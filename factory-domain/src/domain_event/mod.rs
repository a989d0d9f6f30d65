//! 领域事件（Domain Event）
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`）。事件一经追加便不可修改或删除，
//! 只携带重建状态所需的数据，并标注其所属聚合的标识。

mod domain_event_trait;

pub use domain_event_trait::DomainEvent;
