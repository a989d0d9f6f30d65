use factory_macros::entity_id;
use std::collections::BTreeSet;

#[entity_id]
#[derive(Copy)]
struct WarehouseId(i64);

#[entity_id(debug = false)]
struct SecretId(String);

impl std::fmt::Debug for SecretId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretId(..)")
    }
}

#[test]
fn untagged_id_displays_and_parses_inner_value() {
    let id = WarehouseId::new(7);
    assert_eq!(id.to_string(), "7");
    assert_eq!(*id.value(), 7);

    let parsed: WarehouseId = "7".parse().unwrap();
    assert_eq!(parsed, id);
    assert!("seven".parse::<WarehouseId>().is_err());
}

#[test]
fn conversions_and_ordering() {
    let id: WarehouseId = 3.into();
    let raw: i64 = id.into();
    assert_eq!(raw, 3);
    assert_eq!(id.as_ref(), &3);

    let set: BTreeSet<WarehouseId> = [WarehouseId::new(2), WarehouseId::new(1)].into_iter().collect();
    assert_eq!(set.into_iter().map(i64::from).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn serde_is_transparent_for_newtype() {
    let json = serde_json::to_string(&WarehouseId::new(42)).unwrap();
    assert_eq!(json, "42");
    let back: WarehouseId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, WarehouseId::new(42));
}

#[test]
fn handwritten_debug_is_kept() {
    let id = SecretId::new("s3cr3t".to_string());
    assert_eq!(format!("{id:?}"), "SecretId(..)");
    assert_eq!(id.to_string(), "s3cr3t");
}
