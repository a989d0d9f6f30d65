use crate::error::DomainError;
use crate::value_object::ValueObject;
use factory_macros::entity_id;

/// 工厂标识，显示形式为 `factory-{n}`，同时作为事件流键
#[entity_id(tag = "factory")]
#[derive(Copy)]
pub struct FactoryId(i64);

impl ValueObject for FactoryId {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0 <= 0 {
            return Err(DomainError::InvalidValue {
                reason: format!("factory id must be positive, got {}", self.0),
            });
        }
        Ok(())
    }
}
