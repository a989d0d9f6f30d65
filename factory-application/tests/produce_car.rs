mod support;

use factory_application::commands::ProduceCar;
use factory_domain::factory::{FactoryEvent, FactoryId, FactoryState};
use factory_domain::projection::project;
use support::*;

fn produce(s: &Scenario, who: &str, model: &str) -> ProduceCar {
    ProduceCar {
        id: s.id,
        employee_name: who.to_string(),
        car_model: model.to_string(),
    }
}

fn stocked(id: FactoryId) -> Vec<FactoryEvent> {
    let delivered = shipment("s1", &[("chassis", 1), ("wheels", 4), ("engine", 1)]);
    let mut history = staffed(id);
    history.push(transferred(id, delivered.clone()));
    history.push(unloaded(id, "fry", vec![delivered]));
    history
}

#[tokio::test]
async fn stranger_cannot_produce() {
    let s = Scenario::new(1).with_blueprint("Ford", &[("chassis", 1)]);
    s.given(stocked(s.id)).await;
    s.when(produce(&s, "leela", "Ford"))
        .await
        .expect_error("unknown-employee");
}

#[tokio::test]
async fn unknown_model() {
    let s = Scenario::new(1);
    s.given(stocked(s.id)).await;
    s.when(produce(&s, "fry", "Yugo"))
        .await
        .expect_error("car-model-not-found");
}

#[tokio::test]
async fn missing_parts() {
    let s = Scenario::new(1).with_blueprint("audi", &[("chassis", 1), ("battery", 2)]);
    s.given(stocked(s.id)).await;
    s.when(produce(&s, "fry", "audi"))
        .await
        .expect_error("part-not-found");
}

#[tokio::test]
async fn ford_is_produced_with_fixed_parts_and_stock_is_pruned() {
    let s = Scenario::new(1).with_blueprint("Ford", &[("chassis", 1)]);
    s.given(stocked(s.id)).await;

    s.when(produce(&s, "fry", "Ford"))
        .await
        .expect_events(&[produced(s.id, "fry", "Ford")]);

    let state: FactoryState = project(&s.history().await);
    assert_eq!(state.produced_cars(), ["Ford".to_string()]);
    assert!(state.available_parts().is_empty());
}

#[tokio::test]
async fn blueprint_recorded_later_is_picked_up() {
    let s = Scenario::new(1);
    s.given(stocked(s.id)).await;
    s.when(produce(&s, "fry", "Ford"))
        .await
        .expect_error("car-model-not-found");

    s.library
        .record_blueprint("Ford", parts_of(&[("chassis", 1), ("wheels", 4)]));
    s.when(produce(&s, "fry", "Ford"))
        .await
        .expect_events(&[produced(s.id, "fry", "Ford")]);
}
