use anyhow::Result as AnyResult;
use async_trait::async_trait;
use factory_domain::aggregate_root::AggregateRoot;
use factory_domain::error::{DomainError, DomainResult};
use factory_domain::factory::{CarPart, FactoryAggregate, FactoryEvent, FactoryId};
use factory_domain::persist::{EventStore, EventStream, InMemoryEventStore};
use factory_domain::value_object::Version;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

type Root<S> = AggregateRoot<FactoryAggregate, S>;

#[tokio::test]
async fn update_appends_at_loaded_version() -> AnyResult<()> {
    let store = Arc::new(InMemoryEventStore::<FactoryEvent>::new());
    let root: Root<_> = AggregateRoot::new(store.clone());
    let id = FactoryId::new(42);

    let opened = root.update(&id, |agg| agg.open_factory(id)).await?;
    assert_eq!(opened, vec![FactoryEvent::FactoryOpened { id }]);

    let hired = root
        .update(&id, |agg| agg.assign_employee_to_factory("fry"))
        .await?;
    assert_eq!(hired.len(), 1);

    let stream = store.load_stream(&id).await?;
    assert_eq!(stream.version, Version::from_value(2));
    assert_eq!(stream.events[0], FactoryEvent::FactoryOpened { id });
    Ok(())
}

#[tokio::test]
async fn rejected_command_writes_nothing() -> AnyResult<()> {
    let store = Arc::new(InMemoryEventStore::<FactoryEvent>::new());
    let root: Root<_> = AggregateRoot::new(store.clone());
    let id = FactoryId::new(1);

    let err = root
        .update(&id, |agg| {
            agg.transfer_shipment_to_cargo_bay("s1", vec![CarPart::new("engine", 1)])
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "factory-is-not-open");
    assert!(store.records(&id)?.is_empty());
    Ok(())
}

#[tokio::test]
async fn events_for_another_factory_never_reach_the_stream() -> AnyResult<()> {
    let store = Arc::new(InMemoryEventStore::<FactoryEvent>::new());
    let root: Root<_> = AggregateRoot::new(store.clone());
    let id = FactoryId::new(1);

    let err = root
        .update(&id, |agg| agg.open_factory(FactoryId::new(2)))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "event-store");
    assert_eq!(store.stream_count()?, 0);
    Ok(())
}

#[tokio::test]
async fn multi_event_command_is_appended_atomically() -> AnyResult<()> {
    let store = Arc::new(InMemoryEventStore::<FactoryEvent>::new());
    let root: Root<_> = AggregateRoot::new(store.clone());
    let id = FactoryId::new(1);

    root.update(&id, |agg| agg.open_factory(id)).await?;
    root.update(&id, |agg| agg.assign_employee_to_factory("fry"))
        .await?;
    let appended = root
        .update(&id, |agg| {
            agg.transfer_shipment_to_cargo_bay("big", vec![CarPart::new("wheels", 12)])
        })
        .await?;

    assert_eq!(appended.len(), 2);
    assert!(matches!(appended[1], FactoryEvent::CurseWordUttered { .. }));
    assert_eq!(store.load_stream(&id).await?.version, Version::from_value(4));
    Ok(())
}

/// 在调用方加载之后、追加之前抢先写入一个事件的存储
struct RacingStore {
    inner: InMemoryEventStore<FactoryEvent>,
    raced: AtomicBool,
}

#[async_trait]
impl EventStore<FactoryEvent> for RacingStore {
    async fn load_stream(&self, id: &FactoryId) -> DomainResult<EventStream<FactoryEvent>> {
        let stream = self.inner.load_stream(id).await?;
        if !self.raced.swap(true, Ordering::SeqCst) {
            self.inner
                .append(id, stream.version, vec![FactoryEvent::FactoryOpened { id: *id }])
                .await?;
        }
        Ok(stream)
    }

    async fn append(
        &self,
        id: &FactoryId,
        expected_version: Version,
        events: Vec<FactoryEvent>,
    ) -> DomainResult<Version> {
        self.inner.append(id, expected_version, events).await
    }
}

#[tokio::test]
async fn stale_writer_gets_concurrency_conflict() -> AnyResult<()> {
    let store = Arc::new(RacingStore {
        inner: InMemoryEventStore::new(),
        raced: AtomicBool::new(false),
    });
    let root: Root<_> = AggregateRoot::new(store.clone());
    let id = FactoryId::new(9);

    let err = root.update(&id, |agg| agg.open_factory(id)).await.unwrap_err();
    match err {
        DomainError::ConcurrencyConflict {
            expected, actual, ..
        } => {
            assert_eq!(expected, Version::new());
            assert_eq!(actual, Version::from_value(1));
        }
        other => panic!("unexpected {other:?}"),
    }

    // 只有抢先写入的那一个事件
    assert_eq!(store.inner.records(&id)?.len(), 1);

    // 重新加载后再执行，会看到工厂已开设
    let err = root.update(&id, |agg| agg.open_factory(id)).await.unwrap_err();
    assert_eq!(err.code(), "factory-already-created");
    Ok(())
}
