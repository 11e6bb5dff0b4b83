//! 对话动作：对话主机按名字调用，读取会话快照，返回槽位事件。
//!
//! 每个动作只做一件小事：查询或写入一次数据库，向用户发一条消息，
//! 必要时清空槽位。数据库错误只记日志，用户看不到报错。

pub mod address;
pub mod contact;
pub mod dispatcher;
pub mod feedback;
pub mod flow;
pub mod form;
pub mod greeting;
pub mod order;
pub mod registry;
pub mod tracking;

pub use dispatcher::Dispatcher;
pub use flow::ConversationStage;
pub use form::{FormValidation, FormValidator};
pub use registry::ActionRegistry;

use crate::models::{Event, Tracker};
use async_trait::async_trait;

pub struct ActionContext<'a> {
    pub tracker: &'a Tracker,
}

impl ActionContext<'_> {
    pub fn sender_id(&self) -> &str {
        &self.tracker.sender_id
    }
}

#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event>;
}
