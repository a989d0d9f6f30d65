//! 货物相关的值对象：零件与入库批次
//!
use factory_macros::value_object;
use std::fmt;

/// 零件及其数量
#[value_object]
#[derive(Hash)]
pub struct CarPart {
    pub name: String,
    pub quantity: u32,
}

impl CarPart {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl fmt::Display for CarPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} pcs", self.name, self.quantity)
    }
}

/// 一批送达货舱的货物
#[value_object]
pub struct InventoryShipment {
    pub name: String,
    pub cargo: Vec<CarPart>,
}

impl InventoryShipment {
    pub fn new(name: impl Into<String>, cargo: Vec<CarPart>) -> Self {
        Self {
            name: name.into(),
            cargo,
        }
    }

    /// 全部零件数量之和
    pub fn total_quantity(&self) -> u64 {
        self.cargo.iter().map(|part| u64::from(part.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cargo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_quantity_sums_every_part() {
        let shipment = InventoryShipment::new(
            "s1",
            vec![CarPart::new("wheels", 4), CarPart::new("engine", 1)],
        );
        assert_eq!(shipment.total_quantity(), 5);
        assert!(!shipment.is_empty());
        assert_eq!(InventoryShipment::new("s2", vec![]).total_quantity(), 0);
    }

    #[test]
    fn total_quantity_does_not_overflow_u32() {
        let shipment = InventoryShipment::new(
            "huge",
            vec![CarPart::new("bolts", u32::MAX), CarPart::new("nuts", u32::MAX)],
        );
        assert_eq!(shipment.total_quantity(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn part_displays_as_pieces() {
        assert_eq!(CarPart::new("chassis", 1).to_string(), "chassis 1 pcs");
    }
}
