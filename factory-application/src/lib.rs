//! 工厂应用层（factory-application）
//!
//! 命令 DTO、调用上下文与应用服务；应用服务把每条命令编排为
//! 领域层 `AggregateRoot::update` 的一次执行。
//!
pub mod blueprint_library;
pub mod command;
pub mod command_handler;
pub mod commands;
pub mod context;
pub mod error;
pub mod factory_service;

pub use blueprint_library::InMemoryBlueprintLibrary;
pub use commands::FactoryCommand;
pub use context::AppContext;
pub use error::AppError;
pub use factory_service::FactoryApplicationService;
