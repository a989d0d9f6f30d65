//! 工厂聚合
//!
//! 每个命令方法先完成全部校验，校验通过后才记录事件；
//! 失败时变更缓冲保持为空。
//!
use super::blueprint::CarBlueprintLibrary;
use super::cargo::{CarPart, InventoryShipment};
use super::events::FactoryEvent;
use super::id::FactoryId;
use super::state::FactoryState;
use crate::aggregate::{Aggregate, ChangeBuffer};
use crate::error::{DomainError, DomainResult};

/// 单批货物零件总数超过该值时工人会骂出声
pub const CURSE_THRESHOLD: u64 = 10;
pub const CURSE_WORD: &str = "Boltov tebe v korobky peredach";
pub const CURSE_MEANING: &str = "awe in the face of the amount of shipment delivered";

/// 工厂规则违例，`code()` 为稳定的机器可读错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactoryRule {
    FactoryIsNotOpen,
    FactoryAlreadyCreated,
    MoreThanOnePerson,
    BenderEmployee,
    UnknownEmployee,
    EmptyShipments,
    MoreThanTwoShipments,
    ShipmentAlreadyInCargoBay,
    CarModelNotFound,
    PartNotFound,
}

impl FactoryRule {
    pub const fn code(self) -> &'static str {
        match self {
            Self::FactoryIsNotOpen => "factory-is-not-open",
            Self::FactoryAlreadyCreated => "factory-already-created",
            Self::MoreThanOnePerson => "more-than-1-person",
            Self::BenderEmployee => "bender-employee",
            Self::UnknownEmployee => "unknown-employee",
            Self::EmptyShipments => "empty-InventoryShipments",
            Self::MoreThanTwoShipments => "more-than-two-InventoryShipments",
            Self::ShipmentAlreadyInCargoBay => "shipment-already-in-cargo-bay",
            Self::CarModelNotFound => "car-model-not-found",
            Self::PartNotFound => "part-not-found",
        }
    }

    pub fn violation(self, reason: impl Into<String>) -> DomainError {
        DomainError::rule(self.code(), reason)
    }
}

#[derive(Debug, Clone)]
pub struct FactoryAggregate {
    changes: ChangeBuffer<FactoryState>,
}

impl Aggregate for FactoryAggregate {
    const TYPE: &'static str = "factory";

    type Event = FactoryEvent;
    type State = FactoryState;

    fn from_state(state: FactoryState) -> Self {
        Self {
            changes: ChangeBuffer::new(state),
        }
    }

    fn state(&self) -> &FactoryState {
        self.changes.state()
    }

    fn changes(&self) -> &[FactoryEvent] {
        self.changes.changes()
    }

    fn into_changes(self) -> Vec<FactoryEvent> {
        self.changes.into_changes()
    }
}

impl FactoryAggregate {
    pub fn open_factory(&mut self, id: FactoryId) -> DomainResult<()> {
        if let Some(existing) = self.state().id() {
            return Err(FactoryRule::FactoryAlreadyCreated
                .violation(format!("factory '{existing}' was already created")));
        }

        self.changes.record(FactoryEvent::FactoryOpened { id });
        Ok(())
    }

    pub fn assign_employee_to_factory(&mut self, employee_name: &str) -> DomainResult<()> {
        let id = self.opened_id()?;

        // 整个工厂只允许一名员工，与名字无关
        if !self.state().employees().is_empty() {
            return Err(FactoryRule::MoreThanOnePerson.violation(format!(
                "cannot assign '{employee_name}': only one employee is allowed"
            )));
        }
        if employee_name == "bender" {
            return Err(FactoryRule::BenderEmployee.violation("guys named 'bender' are trouble"));
        }

        self.changes.record(FactoryEvent::EmployeeAssignedToFactory {
            id,
            employee_name: employee_name.to_string(),
        });
        Ok(())
    }

    pub fn transfer_shipment_to_cargo_bay(
        &mut self,
        shipment_name: &str,
        cargo: Vec<CarPart>,
    ) -> DomainResult<()> {
        let id = self.opened_id()?;

        if self.state().employees().is_empty() {
            return Err(FactoryRule::UnknownEmployee
                .violation("somebody has to be at the factory to accept a shipment"));
        }
        if cargo.is_empty() {
            return Err(FactoryRule::EmptyShipments.violation("empty shipments are not accepted"));
        }
        if self.state().shipments_waiting().len() >= 2 {
            return Err(FactoryRule::MoreThanTwoShipments
                .violation("more than two shipments can't fit into the cargo bay"));
        }
        if self.state().shipments_waiting().contains_key(shipment_name) {
            return Err(FactoryRule::ShipmentAlreadyInCargoBay.violation(format!(
                "shipment '{shipment_name}' is already waiting in the cargo bay"
            )));
        }

        let shipment = InventoryShipment::new(shipment_name, cargo);
        let total = shipment.total_quantity();

        self.changes
            .record(FactoryEvent::ShipmentTransferredToCargoBay { id, shipment });

        if total > CURSE_THRESHOLD {
            self.changes.record(FactoryEvent::CurseWordUttered {
                id,
                word: CURSE_WORD.to_string(),
                meaning: CURSE_MEANING.to_string(),
            });
        }
        Ok(())
    }

    pub fn unload_shipment_from_cargo_bay(&mut self, employee_name: &str) -> DomainResult<()> {
        let id = self.opened_id()?;

        if !self.state().has_employee(employee_name) {
            return Err(FactoryRule::UnknownEmployee
                .violation(format!("'{employee_name}' is not assigned to the factory")));
        }
        if self.state().shipments_waiting().is_empty() {
            return Err(FactoryRule::EmptyShipments.violation("no shipments await unloading"));
        }

        // 每次记录都会把已卸批次移出等待队列
        let mut unloaded = Vec::new();
        while let Some(next) = self.state().shipments_waiting().values().next().cloned() {
            unloaded.push(next);
            self.changes.record(FactoryEvent::UnloadedFromCargoBay {
                id,
                employee_name: employee_name.to_string(),
                shipments: unloaded.clone(),
            });
        }
        Ok(())
    }

    pub fn produce_car<L>(
        &mut self,
        employee_name: &str,
        car_model: &str,
        library: &L,
    ) -> DomainResult<()>
    where
        L: CarBlueprintLibrary + ?Sized,
    {
        let id = self.opened_id()?;

        if !self.state().has_employee(employee_name) {
            return Err(FactoryRule::UnknownEmployee
                .violation(format!("'{employee_name}' is not assigned to the factory")));
        }

        let Some(blueprint) = library.blueprint_for(car_model) else {
            return Err(
                FactoryRule::CarModelNotFound.violation(format!("model '{car_model}' not found"))
            );
        };

        if let Some(short) = blueprint
            .required_parts
            .iter()
            .find(|part| self.state().part_quantity(&part.name) < part.quantity)
        {
            return Err(FactoryRule::PartNotFound.violation(format!(
                "{} not found: need {}, have {}",
                short.name,
                short.quantity,
                self.state().part_quantity(&short.name)
            )));
        }

        // 实际消耗的零件固定，不随蓝图变化
        self.changes.record(FactoryEvent::CarProduced {
            id,
            employee_name: employee_name.to_string(),
            car_model: car_model.to_string(),
            parts: vec![
                CarPart::new("chassis", 1),
                CarPart::new("wheels", 4),
                CarPart::new("engine", 1),
            ],
        });
        Ok(())
    }

    fn opened_id(&self) -> DomainResult<FactoryId> {
        self.state()
            .id()
            .ok_or_else(|| FactoryRule::FactoryIsNotOpen.violation("factory is not open yet"))
    }
}
