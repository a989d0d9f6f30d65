use anyhow::Result as AnyResult;
use factory_application::commands::{
    AssignEmployeeToFactory, OpenFactory, ProduceCar, TransferShipmentToCargoBay,
    UnloadShipmentFromCargoBay,
};
use factory_application::{
    AppContext, AppError, FactoryApplicationService, FactoryCommand, InMemoryBlueprintLibrary,
};
use factory_domain::error::DomainError;
use factory_domain::factory::{CarPart, FactoryEvent, FactoryId, FactoryState};
use factory_domain::persist::{EventStore, InMemoryEventStore};
use factory_domain::projection::project;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn parts(list: &[(&str, u32)]) -> Vec<CarPart> {
    list.iter().map(|(name, qty)| CarPart::new(*name, *qty)).collect()
}

fn is_rule_rejection(err: &AppError) -> bool {
    err.as_domain().is_some_and(DomainError::is_rule_violation)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> AnyResult<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Arc::new(InMemoryEventStore::<FactoryEvent>::new());
    let library = Arc::new(InMemoryBlueprintLibrary::with_standard_models());
    let service = FactoryApplicationService::new(store.clone(), library);
    let id = FactoryId::new(1);

    let commands: Vec<FactoryCommand> = vec![
        OpenFactory { id }.into(),
        AssignEmployeeToFactory {
            id,
            employee_name: "bender".into(),
        }
        .into(),
        AssignEmployeeToFactory {
            id,
            employee_name: "fry".into(),
        }
        .into(),
        TransferShipmentToCargoBay {
            id,
            shipment_name: "chassis delivery".into(),
            parts: parts(&[("chassis", 2)]),
        }
        .into(),
        TransferShipmentToCargoBay {
            id,
            shipment_name: "wheel pallet".into(),
            parts: parts(&[("wheels", 8), ("engine", 3)]),
        }
        .into(),
        ProduceCar {
            id,
            employee_name: "fry".into(),
            car_model: "Ford".into(),
        }
        .into(),
        UnloadShipmentFromCargoBay {
            id,
            employee_name: "fry".into(),
        }
        .into(),
        ProduceCar {
            id,
            employee_name: "fry".into(),
            car_model: "Ford".into(),
        }
        .into(),
        ProduceCar {
            id,
            employee_name: "fry".into(),
            car_model: "audi".into(),
        }
        .into(),
    ];

    for command in commands {
        let ctx = AppContext::builder()
            .correlation_id(uuid::Uuid::new_v4().to_string())
            .actor("demo".to_string())
            .build();
        // 业务规则拒绝只记录日志，场景继续；其他错误直接终止
        match service.execute(&ctx, command).await {
            Ok(_) => {}
            Err(err) if is_rule_rejection(&err) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    let stream = store.load_stream(&id).await?;
    let state: FactoryState = project(&stream.events);
    info!(
        factory = %id,
        version = %stream.version,
        employees = ?state.employees(),
        produced = ?state.produced_cars(),
        available = ?state.available_parts(),
        "final state"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rule_violations_are_skipped() {
        assert!(is_rule_rejection(&AppError::from(DomainError::rule(
            "bender-employee",
            "guys named 'bender' are trouble"
        ))));
        assert!(!is_rule_rejection(&AppError::from(DomainError::event_store(
            "in-memory event store lock poisoned"
        ))));
        assert!(!is_rule_rejection(&AppError::Validation(
            "factory id must be positive".into()
        )));
    }
}
