//! 领域层统一错误定义
//!
//! 分为两类：
//! - 领域规则违例（`RuleViolation`）：携带稳定的机器可匹配错误码，调用方据此分支处理；
//! - 基础设施故障：并发冲突（可重新加载后重试）、未处理的事件类型（致命的编程错误）等。
//!
use crate::value_object::Version;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 领域规则 ---
    #[error("[{code}] {reason}")]
    RuleViolation { code: &'static str, reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 事件存储 ---
    #[error("concurrency conflict on {stream}: expected={expected}, actual={actual}")]
    ConcurrencyConflict {
        stream: String,
        expected: Version,
        actual: Version,
    },
    #[error("unhandled event type: {event_type}")]
    UnhandledEventType { event_type: String },
    #[error("event store error: {reason}")]
    EventStore { reason: String },

    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn rule(code: &'static str, reason: impl Into<String>) -> Self {
        Self::RuleViolation {
            code,
            reason: reason.into(),
        }
    }

    pub fn event_store(reason: impl Into<String>) -> Self {
        Self::EventStore {
            reason: reason.into(),
        }
    }

    /// 稳定的机器可读错误码，与人类可读的 `Display` 文本相互独立
    pub fn code(&self) -> &'static str {
        match self {
            Self::RuleViolation { code, .. } => *code,
            Self::InvalidValue { .. } => "invalid-value",
            Self::ConcurrencyConflict { .. } => "concurrency-conflict",
            Self::UnhandledEventType { .. } => "unhandled-event-type",
            Self::EventStore { .. } => "event-store",
            Self::Serde { .. } => "serialization",
        }
    }

    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::RuleViolation { .. })
    }

    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(self, Self::ConcurrencyConflict { .. })
    }
}
