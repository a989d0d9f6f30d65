//! 工厂领域事件
//!
//! 事件一经追加即不可修改；每个变体都携带所属工厂的标识。
//! `Display` 给出便于阅读的事件描述，用于日志与演示输出。
//!
use super::cargo::{CarPart, InventoryShipment};
use super::id::FactoryId;
use crate::domain_event::DomainEvent;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FactoryEvent {
    FactoryOpened {
        id: FactoryId,
    },
    EmployeeAssignedToFactory {
        id: FactoryId,
        employee_name: String,
    },
    ShipmentTransferredToCargoBay {
        id: FactoryId,
        shipment: InventoryShipment,
    },
    /// 仅作记录，不改变状态
    CurseWordUttered {
        id: FactoryId,
        word: String,
        meaning: String,
    },
    /// `shipments` 为本次卸货中截至该事件已卸下的全部批次
    UnloadedFromCargoBay {
        id: FactoryId,
        employee_name: String,
        shipments: Vec<InventoryShipment>,
    },
    CarProduced {
        id: FactoryId,
        employee_name: String,
        car_model: String,
        parts: Vec<CarPart>,
    },
}

impl DomainEvent for FactoryEvent {
    type Id = FactoryId;

    const EVENT_TYPES: &'static [&'static str] = &[
        "FactoryOpened",
        "EmployeeAssignedToFactory",
        "ShipmentTransferredToCargoBay",
        "CurseWordUttered",
        "UnloadedFromCargoBay",
        "CarProduced",
    ];

    fn event_type(&self) -> &'static str {
        match self {
            Self::FactoryOpened { .. } => "FactoryOpened",
            Self::EmployeeAssignedToFactory { .. } => "EmployeeAssignedToFactory",
            Self::ShipmentTransferredToCargoBay { .. } => "ShipmentTransferredToCargoBay",
            Self::CurseWordUttered { .. } => "CurseWordUttered",
            Self::UnloadedFromCargoBay { .. } => "UnloadedFromCargoBay",
            Self::CarProduced { .. } => "CarProduced",
        }
    }

    fn aggregate_id(&self) -> &FactoryId {
        match self {
            Self::FactoryOpened { id }
            | Self::EmployeeAssignedToFactory { id, .. }
            | Self::ShipmentTransferredToCargoBay { id, .. }
            | Self::CurseWordUttered { id, .. }
            | Self::UnloadedFromCargoBay { id, .. }
            | Self::CarProduced { id, .. } => id,
        }
    }
}

impl fmt::Display for FactoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactoryOpened { id } => write!(f, "Opened factory '{id}'"),
            Self::EmployeeAssignedToFactory { employee_name, .. } => {
                write!(f, "new worker joins our forces: '{employee_name}'")
            }
            Self::ShipmentTransferredToCargoBay { shipment, .. } => {
                write!(f, "Shipment '{}' transferred to cargo bay:", shipment.name)?;
                for part in &shipment.cargo {
                    write!(f, "\n     {part}")?;
                }
                Ok(())
            }
            Self::CurseWordUttered { word, meaning, .. } => {
                write!(f, "'{word}' was heard within the walls. It meant: '{meaning}'")
            }
            Self::UnloadedFromCargoBay {
                employee_name,
                shipments,
                ..
            } => {
                write!(f, "{employee_name} unload:")?;
                for shipment in shipments {
                    write!(f, "\n\tshipment name '{}' and parts:", shipment.name)?;
                    for part in &shipment.cargo {
                        write!(f, "\n\t\t{part}")?;
                    }
                }
                Ok(())
            }
            Self::CarProduced {
                employee_name,
                car_model,
                parts,
                ..
            } => {
                write!(f, "{employee_name} produce car {car_model}:")?;
                for part in parts {
                    write!(f, "\n     {part}")?;
                }
                Ok(())
            }
        }
    }
}
