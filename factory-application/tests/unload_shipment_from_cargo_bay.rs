mod support;

use factory_application::commands::UnloadShipmentFromCargoBay;
use support::*;

fn unload(s: &Scenario, who: &str) -> UnloadShipmentFromCargoBay {
    UnloadShipmentFromCargoBay {
        id: s.id,
        employee_name: who.to_string(),
    }
}

#[tokio::test]
async fn stranger_cannot_unload() {
    let s = Scenario::new(1);
    s.given(staffed(s.id)).await;
    s.when(unload(&s, "leela")).await.expect_error("unknown-employee");
}

#[tokio::test]
async fn nothing_to_unload() {
    let s = Scenario::new(1);
    s.given(staffed(s.id)).await;
    s.when(unload(&s, "fry"))
        .await
        .expect_error("empty-InventoryShipments");
}

#[tokio::test]
async fn unloading_two_shipments_emits_cumulative_lists() {
    let s = Scenario::new(1);
    let s1 = shipment("s1", &[("wheels", 4)]);
    let s2 = shipment("s2", &[("engine", 1)]);
    let mut history = staffed(s.id);
    history.push(transferred(s.id, s1.clone()));
    history.push(transferred(s.id, s2.clone()));
    s.given(history).await;

    s.when(unload(&s, "fry")).await.expect_events(&[
        unloaded(s.id, "fry", vec![s1.clone()]),
        unloaded(s.id, "fry", vec![s1, s2]),
    ]);

    // 卸完后货舱为空
    s.when(unload(&s, "fry"))
        .await
        .expect_error("empty-InventoryShipments");
}
