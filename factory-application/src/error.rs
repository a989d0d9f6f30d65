use factory_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(String),
}

impl AppError {
    /// 稳定的机器可读错误码；领域错误原样转发其错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(err) => err.code(),
            Self::Validation(_) => "validation",
        }
    }

    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(self, Self::Domain(err) if err.is_concurrency_conflict())
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Validation(_) => None,
        }
    }
}
