use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次命令调用的横切信息：关联追踪 `correlation_id`、因果链 `causation_id`
/// 与执行者 `actor`。它们只进入日志，不写入领域事件。
///
/// 典型用法：
/// ```rust
/// use factory_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .actor("manager".to_string())
///     .build();
///
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert_eq!(ctx.causation_id(), None);
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    correlation_id: Option<String>,
    causation_id: Option<String>,
    /// 执行者（如操作员姓名、系统名）
    actor: Option<String>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn causation_id(&self) -> Option<&str> {
        self.causation_id.as_deref()
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}
