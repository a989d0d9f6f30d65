//! Given/When/Expect 测试夹具
//!
//! given：以期望版本 0 预置事件流；when：经应用服务执行一条命令；
//! expect：断言本次追加的事件，或断言错误码且事件流未被改动。
#![allow(dead_code)]

use factory_application::{
    AppContext, AppError, FactoryApplicationService, FactoryCommand, InMemoryBlueprintLibrary,
};
use factory_domain::factory::{CarPart, FactoryEvent, FactoryId, InventoryShipment};
use factory_domain::persist::{EventStore, InMemoryEventStore, SerializedEvent};
use factory_domain::value_object::Version;
use std::sync::Arc;

pub type Store = Arc<InMemoryEventStore<FactoryEvent>>;
pub type Library = Arc<InMemoryBlueprintLibrary>;
pub type Service = FactoryApplicationService<Store, Library>;

pub struct Scenario {
    pub id: FactoryId,
    pub store: Store,
    pub library: Library,
    pub service: Service,
}

impl Scenario {
    pub fn new(id: i64) -> Self {
        let store: Store = Arc::new(InMemoryEventStore::new());
        let library: Library = Arc::new(InMemoryBlueprintLibrary::new());
        let service = FactoryApplicationService::new(store.clone(), library.clone());
        Self {
            id: FactoryId::new(id),
            store,
            library,
            service,
        }
    }

    pub async fn given(&self, events: Vec<FactoryEvent>) {
        self.store
            .append(&self.id, Version::new(), events)
            .await
            .expect("seed stream");
    }

    pub fn with_blueprint(self, model: &str, parts: &[(&str, u32)]) -> Self {
        self.library.record_blueprint(model, parts_of(parts));
        self
    }

    pub async fn when(&self, command: impl Into<FactoryCommand>) -> Outcome {
        let before = self.records();
        let ctx = AppContext::builder()
            .correlation_id("test-correlation".to_string())
            .actor("test".to_string())
            .build();
        let result = self.service.execute(&ctx, command).await;
        let after = self.records();
        Outcome {
            result,
            before,
            after,
        }
    }

    pub fn records(&self) -> Vec<SerializedEvent> {
        self.store.records(&self.id).expect("read records")
    }

    pub async fn history(&self) -> Vec<FactoryEvent> {
        self.store
            .load_stream(&self.id)
            .await
            .expect("load stream")
            .events
    }
}

pub struct Outcome {
    pub result: Result<Vec<FactoryEvent>, AppError>,
    before: Vec<SerializedEvent>,
    after: Vec<SerializedEvent>,
}

impl Outcome {
    /// 断言恰好追加了这些事件
    pub fn expect_events(&self, expected: &[FactoryEvent]) {
        match &self.result {
            Ok(events) => assert_eq!(events.as_slice(), expected),
            Err(err) => panic!("expected events, got error [{}] {err}", err.code()),
        }
        assert_eq!(self.after.len(), self.before.len() + expected.len());
    }

    /// 断言失败于给定错误码，且事件流未被改动
    pub fn expect_error(&self, code: &str) {
        match &self.result {
            Ok(events) => panic!("expected error {code}, got events {events:?}"),
            Err(err) => assert_eq!(err.code(), code, "unexpected error: {err}"),
        }
        assert_eq!(self.after, self.before, "failed command must not touch the stream");
    }
}

pub fn parts_of(parts: &[(&str, u32)]) -> Vec<CarPart> {
    parts
        .iter()
        .map(|(name, quantity)| CarPart::new(*name, *quantity))
        .collect()
}

pub fn opened(id: FactoryId) -> FactoryEvent {
    FactoryEvent::FactoryOpened { id }
}

pub fn hired(id: FactoryId, employee_name: &str) -> FactoryEvent {
    FactoryEvent::EmployeeAssignedToFactory {
        id,
        employee_name: employee_name.to_string(),
    }
}

pub fn shipment(name: &str, parts: &[(&str, u32)]) -> InventoryShipment {
    InventoryShipment::new(name, parts_of(parts))
}

pub fn transferred(id: FactoryId, shipment: InventoryShipment) -> FactoryEvent {
    FactoryEvent::ShipmentTransferredToCargoBay { id, shipment }
}

pub fn unloaded(id: FactoryId, employee_name: &str, shipments: Vec<InventoryShipment>) -> FactoryEvent {
    FactoryEvent::UnloadedFromCargoBay {
        id,
        employee_name: employee_name.to_string(),
        shipments,
    }
}

pub fn produced(id: FactoryId, employee_name: &str, car_model: &str) -> FactoryEvent {
    FactoryEvent::CarProduced {
        id,
        employee_name: employee_name.to_string(),
        car_model: car_model.to_string(),
        parts: parts_of(&[("chassis", 1), ("wheels", 4), ("engine", 1)]),
    }
}

/// 已开设且已分配员工 fry 的工厂
pub fn staffed(id: FactoryId) -> Vec<FactoryEvent> {
    vec![opened(id), hired(id, "fry")]
}
