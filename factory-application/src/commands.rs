//! 工厂命令 DTO 与命令和类型
//!
use crate::{command::Command, error::AppError};
use factory_domain::factory::{CarPart, FactoryId};
use factory_domain::value_object::ValueObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenFactory {
    pub id: FactoryId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignEmployeeToFactory {
    pub id: FactoryId,
    pub employee_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferShipmentToCargoBay {
    pub id: FactoryId,
    pub shipment_name: String,
    pub parts: Vec<CarPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnloadShipmentFromCargoBay {
    pub id: FactoryId,
    pub employee_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduceCar {
    pub id: FactoryId,
    pub employee_name: String,
    pub car_model: String,
}

impl Command for OpenFactory {
    const NAME: &'static str = "OpenFactory";
    type Id = FactoryId;

    fn id(&self) -> &FactoryId {
        &self.id
    }

    fn validate(&self) -> Result<(), AppError> {
        self.id
            .validate()
            .map_err(|err| AppError::Validation(err.to_string()))
    }
}

impl Command for AssignEmployeeToFactory {
    const NAME: &'static str = "AssignEmployeeToFactory";
    type Id = FactoryId;

    fn id(&self) -> &FactoryId {
        &self.id
    }
}

impl Command for TransferShipmentToCargoBay {
    const NAME: &'static str = "TransferShipmentToCargoBay";
    type Id = FactoryId;

    fn id(&self) -> &FactoryId {
        &self.id
    }
}

impl Command for UnloadShipmentFromCargoBay {
    const NAME: &'static str = "UnloadShipmentFromCargoBay";
    type Id = FactoryId;

    fn id(&self) -> &FactoryId {
        &self.id
    }
}

impl Command for ProduceCar {
    const NAME: &'static str = "ProduceCar";
    type Id = FactoryId;

    fn id(&self) -> &FactoryId {
        &self.id
    }
}

/// 工厂聚合可接受的全部命令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FactoryCommand {
    OpenFactory(OpenFactory),
    AssignEmployeeToFactory(AssignEmployeeToFactory),
    TransferShipmentToCargoBay(TransferShipmentToCargoBay),
    UnloadShipmentFromCargoBay(UnloadShipmentFromCargoBay),
    ProduceCar(ProduceCar),
}

impl FactoryCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenFactory(_) => OpenFactory::NAME,
            Self::AssignEmployeeToFactory(_) => AssignEmployeeToFactory::NAME,
            Self::TransferShipmentToCargoBay(_) => TransferShipmentToCargoBay::NAME,
            Self::UnloadShipmentFromCargoBay(_) => UnloadShipmentFromCargoBay::NAME,
            Self::ProduceCar(_) => ProduceCar::NAME,
        }
    }

    pub fn id(&self) -> &FactoryId {
        match self {
            Self::OpenFactory(c) => c.id(),
            Self::AssignEmployeeToFactory(c) => c.id(),
            Self::TransferShipmentToCargoBay(c) => c.id(),
            Self::UnloadShipmentFromCargoBay(c) => c.id(),
            Self::ProduceCar(c) => c.id(),
        }
    }
}

macro_rules! impl_from_command {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for FactoryCommand {
                fn from(cmd: $variant) -> Self {
                    Self::$variant(cmd)
                }
            }
        )*
    };
}

impl_from_command!(
    OpenFactory,
    AssignEmployeeToFactory,
    TransferShipmentToCargoBay,
    UnloadShipmentFromCargoBay,
    ProduceCar,
);
