//! 事件溯源领域层（factory-domain）
//!
//! 以“事件日志是唯一事实来源”为核心，提供单聚合一致性边界所需的构件：
//! - 强类型标识（`identity`）与值对象（`value_object`），包括乐观并发使用的 `Version`
//! - 领域事件协议（`domain_event`）与状态投影（`projection`）
//! - 聚合与变更缓冲（`aggregate`），以及“加载 → 投影 → 校验 → 追加”的编排器（`aggregate_root`）
//! - 事件存储协议、序列化形态与内存参考实现（`persist`）
//! - 工厂聚合（`factory`）：状态、命令校验、事件与蓝图目录协议
//!
//! 典型用法：
//! 1. 为聚合定义事件枚举并实现 `DomainEvent`；
//! 2. 为状态实现 `AggregateState::mutate`，每个事件变体对应一个处理分支；
//! 3. 在聚合上编写命令方法，校验通过后通过 `ChangeBuffer::record` 记录事件；
//! 4. 使用 `AggregateRoot::update` 以加载时的版本号作为期望版本追加事件。
//!
pub mod aggregate;
pub mod aggregate_root;
pub mod domain_event;
pub mod error;
pub mod factory;
pub mod identity;
pub mod persist;
pub mod projection;
pub mod value_object;

// 允许在本 crate 内部通过 ::factory_domain 进行自引用，
// 以便 `#[entity_id(tag = ..)]` 生成的路径在本 crate 内也能解析。
extern crate self as factory_domain;
