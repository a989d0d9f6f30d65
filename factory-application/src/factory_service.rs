//! 工厂应用服务
//!
//! 每个命令独立完成一次“加载 → 投影 → 校验 → 按加载版本追加”，
//! 领域错误与并发冲突原样向上传递，不做内部重试。
//!
use crate::{
    command::Command,
    command_handler::CommandHandler,
    commands::{
        AssignEmployeeToFactory, FactoryCommand, OpenFactory, ProduceCar,
        TransferShipmentToCargoBay, UnloadShipmentFromCargoBay,
    },
    context::AppContext,
    error::AppError,
};
use async_trait::async_trait;
use factory_domain::{
    aggregate_root::AggregateRoot,
    domain_event::DomainEvent,
    factory::{CarBlueprintLibrary, FactoryAggregate, FactoryEvent},
    persist::EventStore,
};
use tracing::{Instrument, info, info_span, warn};

pub struct FactoryApplicationService<S, L>
where
    S: EventStore<FactoryEvent>,
    L: CarBlueprintLibrary,
{
    root: AggregateRoot<FactoryAggregate, S>,
    library: L,
}

impl<S, L> FactoryApplicationService<S, L>
where
    S: EventStore<FactoryEvent>,
    L: CarBlueprintLibrary,
{
    pub fn new(store: S, library: L) -> Self {
        Self {
            root: AggregateRoot::new(store),
            library,
        }
    }

    pub fn store(&self) -> &S {
        self.root.store()
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    /// 执行一条命令，返回本次追加的事件
    pub async fn execute(
        &self,
        ctx: &AppContext,
        command: impl Into<FactoryCommand>,
    ) -> Result<Vec<FactoryEvent>, AppError> {
        let command = command.into();
        let span = info_span!(
            "command",
            command = command.name(),
            factory = %command.id(),
            correlation_id = ctx.correlation_id().unwrap_or("-"),
            causation_id = ctx.causation_id().unwrap_or("-"),
            actor = ctx.actor().unwrap_or("-"),
        );

        async move {
            let result = match command {
                FactoryCommand::OpenFactory(c) => {
                    CommandHandler::<OpenFactory>::handle(self, ctx, c).await
                }
                FactoryCommand::AssignEmployeeToFactory(c) => {
                    CommandHandler::<AssignEmployeeToFactory>::handle(self, ctx, c).await
                }
                FactoryCommand::TransferShipmentToCargoBay(c) => {
                    CommandHandler::<TransferShipmentToCargoBay>::handle(self, ctx, c).await
                }
                FactoryCommand::UnloadShipmentFromCargoBay(c) => {
                    CommandHandler::<UnloadShipmentFromCargoBay>::handle(self, ctx, c).await
                }
                FactoryCommand::ProduceCar(c) => {
                    CommandHandler::<ProduceCar>::handle(self, ctx, c).await
                }
            };

            match &result {
                Ok(events) => {
                    for event in events {
                        info!(event_type = event.event_type(), "{event}");
                    }
                }
                Err(err) if err.is_concurrency_conflict() => {
                    warn!(code = err.code(), error = %err, "command conflicted");
                }
                Err(err) => {
                    info!(code = err.code(), error = %err, "command rejected");
                }
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<S, L> CommandHandler<OpenFactory> for FactoryApplicationService<S, L>
where
    S: EventStore<FactoryEvent>,
    L: CarBlueprintLibrary,
{
    type Output = Vec<FactoryEvent>;

    async fn handle(&self, _ctx: &AppContext, cmd: OpenFactory) -> Result<Self::Output, AppError> {
        cmd.validate()?;
        let id = cmd.id;
        Ok(self.root.update(&id, |agg| agg.open_factory(id)).await?)
    }
}

#[async_trait]
impl<S, L> CommandHandler<AssignEmployeeToFactory> for FactoryApplicationService<S, L>
where
    S: EventStore<FactoryEvent>,
    L: CarBlueprintLibrary,
{
    type Output = Vec<FactoryEvent>;

    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: AssignEmployeeToFactory,
    ) -> Result<Self::Output, AppError> {
        cmd.validate()?;
        Ok(self
            .root
            .update(&cmd.id, |agg| {
                agg.assign_employee_to_factory(&cmd.employee_name)
            })
            .await?)
    }
}

#[async_trait]
impl<S, L> CommandHandler<TransferShipmentToCargoBay> for FactoryApplicationService<S, L>
where
    S: EventStore<FactoryEvent>,
    L: CarBlueprintLibrary,
{
    type Output = Vec<FactoryEvent>;

    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: TransferShipmentToCargoBay,
    ) -> Result<Self::Output, AppError> {
        cmd.validate()?;
        let TransferShipmentToCargoBay {
            id,
            shipment_name,
            parts,
        } = cmd;
        Ok(self
            .root
            .update(&id, move |agg| {
                agg.transfer_shipment_to_cargo_bay(&shipment_name, parts)
            })
            .await?)
    }
}

#[async_trait]
impl<S, L> CommandHandler<UnloadShipmentFromCargoBay> for FactoryApplicationService<S, L>
where
    S: EventStore<FactoryEvent>,
    L: CarBlueprintLibrary,
{
    type Output = Vec<FactoryEvent>;

    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: UnloadShipmentFromCargoBay,
    ) -> Result<Self::Output, AppError> {
        cmd.validate()?;
        Ok(self
            .root
            .update(&cmd.id, |agg| {
                agg.unload_shipment_from_cargo_bay(&cmd.employee_name)
            })
            .await?)
    }
}

#[async_trait]
impl<S, L> CommandHandler<ProduceCar> for FactoryApplicationService<S, L>
where
    S: EventStore<FactoryEvent>,
    L: CarBlueprintLibrary,
{
    type Output = Vec<FactoryEvent>;

    async fn handle(&self, _ctx: &AppContext, cmd: ProduceCar) -> Result<Self::Output, AppError> {
        cmd.validate()?;
        let library = &self.library;
        Ok(self
            .root
            .update(&cmd.id, |agg| {
                agg.produce_car(&cmd.employee_name, &cmd.car_model, library)
            })
            .await?)
    }
}
