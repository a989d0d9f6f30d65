//! 工厂聚合：事件、状态投影、命令校验与车型蓝图协议
//!
mod aggregate;
mod blueprint;
mod cargo;
mod events;
mod id;
mod state;

pub use aggregate::{CURSE_MEANING, CURSE_THRESHOLD, CURSE_WORD, FactoryAggregate, FactoryRule};
pub use blueprint::{CarBlueprint, CarBlueprintLibrary};
pub use cargo::{CarPart, InventoryShipment};
pub use events::FactoryEvent;
pub use id::FactoryId;
pub use state::FactoryState;
