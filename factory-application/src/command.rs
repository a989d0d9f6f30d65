use factory_domain::identity::Identity;

use crate::error::AppError;

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，指明目标聚合并携带参数；一次性消费，不保留状态。
/// - 建议保持语义化的“动宾结构”命名，如 `OpenFactory`、`ProduceCar`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志与追踪。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 目标聚合的标识类型
    type Id: Identity;

    fn id(&self) -> &Self::Id;

    /// 访问事件存储之前的输入校验
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}
