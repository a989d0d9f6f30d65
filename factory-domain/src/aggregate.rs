//! 聚合（Aggregate）抽象
//!
//! 聚合包装一份刚投影出的状态，命令方法先完成全部校验，
//! 通过后才把新事件记录进变更缓冲（`ChangeBuffer`）。缓冲中的事件在追加成功前
//! 不会被持久化；一次命令执行结束后缓冲即被交出并丢弃。
//!
use crate::domain_event::DomainEvent;
use crate::projection::AggregateState;

/// 聚合接口
pub trait Aggregate: Sized + Send {
    /// 聚合类型名（用于日志与存储元数据）
    const TYPE: &'static str;

    /// 该聚合产生的领域事件类型
    type Event: DomainEvent;
    /// 该聚合投影使用的状态类型
    type State: AggregateState<Event = Self::Event>;

    /// 基于投影状态构造聚合
    fn from_state(state: Self::State) -> Self;

    /// 当前工作状态（包含本次命令已记录事件的效果）
    fn state(&self) -> &Self::State;

    /// 本次命令已记录、尚未持久化的事件
    fn changes(&self) -> &[Self::Event];

    /// 交出变更缓冲
    fn into_changes(self) -> Vec<Self::Event>;
}

/// 变更缓冲：记录事件的同时立即作用于工作状态，
/// 使同一命令内后续的判断能看到先前记录的事件效果。
#[derive(Debug, Clone)]
pub struct ChangeBuffer<S>
where
    S: AggregateState,
{
    state: S,
    changes: Vec<S::Event>,
}

impl<S> ChangeBuffer<S>
where
    S: AggregateState,
{
    pub fn new(state: S) -> Self {
        Self {
            state,
            changes: Vec::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn changes(&self) -> &[S::Event] {
        &self.changes
    }

    pub fn record(&mut self, event: S::Event) {
        self.state.mutate(&event);
        self.changes.push(event);
    }

    pub fn into_changes(self) -> Vec<S::Event> {
        self.changes
    }
}
