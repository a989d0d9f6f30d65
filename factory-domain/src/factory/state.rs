//! 工厂状态投影
//!
//! 状态字段只在 `mutate` 的各事件分支中被修改。
//!
use super::cargo::InventoryShipment;
use super::events::FactoryEvent;
use super::id::FactoryId;
use crate::projection::AggregateState;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactoryState {
    id: Option<FactoryId>,
    employees: BTreeSet<String>,
    // 以批次名为键，卸货按键序进行
    shipments_waiting: BTreeMap<String, InventoryShipment>,
    // 不保留数量为 0 的条目
    available_parts: BTreeMap<String, u32>,
    produced_cars: Vec<String>,
}

impl FactoryState {
    /// 工厂尚未开设时为 `None`
    pub fn id(&self) -> Option<FactoryId> {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.id.is_some()
    }

    pub fn employees(&self) -> &BTreeSet<String> {
        &self.employees
    }

    pub fn has_employee(&self, name: &str) -> bool {
        self.employees.contains(name)
    }

    pub fn shipments_waiting(&self) -> &BTreeMap<String, InventoryShipment> {
        &self.shipments_waiting
    }

    pub fn available_parts(&self) -> &BTreeMap<String, u32> {
        &self.available_parts
    }

    /// 某零件的可用数量，未登记的零件为 0
    pub fn part_quantity(&self, name: &str) -> u32 {
        self.available_parts.get(name).copied().unwrap_or(0)
    }

    pub fn produced_cars(&self) -> &[String] {
        &self.produced_cars
    }
}

impl AggregateState for FactoryState {
    type Event = FactoryEvent;

    fn mutate(&mut self, event: &FactoryEvent) {
        match event {
            FactoryEvent::FactoryOpened { id } => {
                self.id = Some(*id);
            }
            FactoryEvent::EmployeeAssignedToFactory { employee_name, .. } => {
                self.employees.insert(employee_name.clone());
            }
            FactoryEvent::ShipmentTransferredToCargoBay { shipment, .. } => {
                self.shipments_waiting
                    .insert(shipment.name.clone(), shipment.clone());
            }
            FactoryEvent::CurseWordUttered { .. } => {}
            FactoryEvent::UnloadedFromCargoBay { shipments, .. } => {
                for shipment in shipments {
                    self.shipments_waiting.remove(&shipment.name);
                    for part in &shipment.cargo {
                        let quantity = self.available_parts.entry(part.name.clone()).or_insert(0);
                        *quantity = quantity.saturating_add(part.quantity);
                    }
                }
                self.available_parts.retain(|_, quantity| *quantity > 0);
            }
            FactoryEvent::CarProduced {
                car_model, parts, ..
            } => {
                self.produced_cars.push(car_model.clone());
                for part in parts {
                    if let Some(quantity) = self.available_parts.get_mut(&part.name) {
                        *quantity = quantity.saturating_sub(part.quantity);
                    }
                }
                self.available_parts.retain(|_, quantity| *quantity > 0);
            }
        }
    }
}
