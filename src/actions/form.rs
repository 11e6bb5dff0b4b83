use super::{Action, ActionContext, Dispatcher};
use crate::models::Event;
use async_trait::async_trait;

/// 表单槽位校验：返回 Some(value) 接受，None 拒绝并清空槽位
#[async_trait]
pub trait FormValidator: Send + Sync {
    fn form_name(&self) -> &'static str;

    /// 本表单负责校验的槽位
    fn slots(&self) -> &'static [&'static str];

    async fn validate_slot(
        &self,
        slot: &str,
        value: &str,
        ctx: &ActionContext<'_>,
        dispatcher: &mut Dispatcher,
    ) -> Option<String>;
}

/// 把 FormValidator 包装成可注册的动作
pub struct FormValidation<V>(pub V);

#[async_trait]
impl<V: FormValidator> Action for FormValidation<V> {
    fn name(&self) -> &'static str {
        self.0.form_name()
    }

    async fn run(&self, ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        let form_slots = self.0.slots();

        // 优先校验本轮用户发言后新设置的槽位；没有事件历史时校验表单里已填的槽位
        let candidates = match ctx.tracker.slots_set_since_last_user_message() {
            Some(set) => set,
            None => form_slots
                .iter()
                .map(|slot| (slot.to_string(), ctx.tracker.get_slot(slot)))
                .collect(),
        };

        let mut events = Vec::new();
        for (slot, value) in candidates {
            if !form_slots.contains(&slot.as_str()) {
                continue;
            }
            let Some(value) = value else { continue };
            let validated = self.0.validate_slot(&slot, &value, ctx, dispatcher).await;
            if validated.is_none() {
                log::info!("Slot {slot} rejected by {}", self.0.form_name());
            }
            events.push(Event::slot(&slot, validated));
        }
        events
    }
}
