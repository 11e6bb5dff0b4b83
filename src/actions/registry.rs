use super::address::{ActionAskAddress, ActionSaveAddress, ValidateAddressForm};
use super::contact::{ActionAskContact, ActionSendPin, ActionValidatePin, ValidateContactForm};
use super::feedback::{
    ActionAskFeedback, ActionAskOrderIdForFeedback, ActionSaveFeedback, ValidateFeedbackForm,
};
use super::greeting::{ActionGreet, ActionShowMenu};
use super::order::{ActionOrderDone, ActionOrderItem};
use super::tracking::{ActionAskOrderIdForTracking, ActionCheckOrderStatus, ValidateOrderTrackingForm};
use super::{Action, ActionContext, ConversationStage, Dispatcher, FormValidation};
use crate::error::{AppError, AppResult};
use crate::models::{ActionCall, ActionResponse, Event};
use crate::services::{CustomerService, FeedbackService, OrderService};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::collections::HashMap;

/// 按名字注册的动作表
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册全部点餐动作，共用同一个连接池
    pub fn with_default_actions(pool: DatabaseConnection) -> Self {
        let orders = OrderService::new(pool.clone());
        let customers = CustomerService::new(pool.clone());
        let feedback = FeedbackService::new(pool);

        let mut registry = Self::new();
        registry.register(ActionGreet);
        registry.register(ActionShowMenu);
        registry.register(ActionOrderItem::new(orders.clone()));
        registry.register(ActionAskContact);
        registry.register(FormValidation(ValidateContactForm));
        registry.register(ActionSendPin::new(customers.clone()));
        registry.register(ActionValidatePin::new(customers.clone()));
        registry.register(ActionAskAddress);
        registry.register(FormValidation(ValidateAddressForm));
        registry.register(ActionSaveAddress::new(customers));
        registry.register(ActionOrderDone::new(orders.clone()));
        registry.register(ActionAskOrderIdForTracking);
        registry.register(FormValidation(ValidateOrderTrackingForm::new(orders.clone())));
        registry.register(ActionCheckOrderStatus::new(orders.clone()));
        registry.register(ActionAskOrderIdForFeedback);
        registry.register(FormValidation(ValidateFeedbackForm::new(orders)));
        registry.register(ActionAskFeedback);
        registry.register(ActionSaveFeedback::new(feedback));
        registry
    }

    pub fn register<A: Action + 'static>(&mut self, action: A) {
        let name = action.name();
        if self.actions.insert(name, Box::new(action)).is_some() {
            log::warn!("Action {name} registered twice, keeping the latest");
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// 执行一次动作调用，返回槽位事件与要发送的消息
    pub async fn execute(&self, call: &ActionCall) -> AppResult<ActionResponse> {
        let name = call.next_action.as_str();
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| AppError::ActionNotFound(name.to_string()))?;

        let tracker = &call.tracker;
        log::info!(
            "Running {name} for sender {}, input message: {:?}",
            tracker.sender_id,
            tracker.latest_text()
        );

        let stage = tracker
            .get_slot(ConversationStage::SLOT)
            .and_then(|s| s.parse::<ConversationStage>().ok())
            .unwrap_or_default();
        if !stage.expects(name) {
            log::warn!(
                "Action {name} arrived out of order for sender {} (stage {stage})",
                tracker.sender_id
            );
        }

        let ctx = ActionContext { tracker };
        let mut dispatcher = Dispatcher::new();
        let mut events = action.run(&ctx, &mut dispatcher).await;

        let next = stage.next(name);
        if next != stage && domain_declares_slot(&call.domain, ConversationStage::SLOT) {
            events.push(Event::set_slot(ConversationStage::SLOT, next.as_str()));
        }

        Ok(ActionResponse {
            events,
            responses: dispatcher.into_messages(),
        })
    }
}

fn domain_declares_slot(domain: &Value, slot: &str) -> bool {
    domain
        .get("slots")
        .and_then(Value::as_object)
        .is_some_and(|slots| slots.contains_key(slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::models::Tracker;
    use serde_json::json;

    fn call(action: &str, tracker: Value, domain: Value) -> ActionCall {
        ActionCall {
            next_action: action.to_string(),
            sender_id: None,
            tracker: serde_json::from_value::<Tracker>(tracker).unwrap(),
            domain,
            version: None,
        }
    }

    #[tokio::test]
    async fn test_registers_every_action() {
        let registry = ActionRegistry::with_default_actions(test_pool().await);
        assert_eq!(
            registry.names(),
            vec![
                "action_ask_address",
                "action_ask_contact",
                "action_ask_feedback",
                "action_ask_order_id_for_feedback",
                "action_ask_order_id_for_tracking",
                "action_check_order_status",
                "action_greet",
                "action_order_done",
                "action_order_item",
                "action_save_address",
                "action_save_feedback",
                "action_send_pin",
                "action_show_menu",
                "action_validate_pin",
                "validate_address_form",
                "validate_contact_form",
                "validate_feedback_form",
                "validate_order_tracking_form",
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let registry = ActionRegistry::with_default_actions(test_pool().await);
        let err = registry
            .execute(&call("action_fly", json!({ "sender_id": "u1" }), json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ActionNotFound(name) if name == "action_fly"));
    }

    #[tokio::test]
    async fn test_stage_written_only_when_declared() {
        let registry = ActionRegistry::with_default_actions(test_pool().await);
        let tracker = json!({ "sender_id": "u1", "latest_message": { "text": "Combo 1 - $10" } });

        let response = registry
            .execute(&call("action_order_item", tracker.clone(), json!({})))
            .await
            .unwrap();
        assert!(response.events.is_empty());

        let response = registry
            .execute(&call(
                "action_order_item",
                tracker,
                json!({ "slots": { "order_stage": { "type": "text" } } }),
            ))
            .await
            .unwrap();
        assert_eq!(
            response.events,
            vec![Event::set_slot("order_stage", "awaiting_contact")]
        );
    }

    #[tokio::test]
    async fn test_order_lifecycle() {
        let registry = ActionRegistry::with_default_actions(test_pool().await);

        registry
            .execute(&call(
                "action_order_item",
                json!({ "sender_id": "u1", "latest_message": { "text": "Combo 1" } }),
                json!({}),
            ))
            .await
            .unwrap();

        let done = registry
            .execute(&call("action_order_done", json!({ "sender_id": "u1" }), json!({})))
            .await
            .unwrap();
        let text = done.responses[0].text.clone().unwrap();
        let order_id = text
            .strip_prefix("Your order is confirmed and your order ID is ")
            .and_then(|rest| rest.split('.').next())
            .unwrap()
            .to_string();
        assert_eq!(order_id.len(), 4);

        let status = registry
            .execute(&call(
                "action_check_order_status",
                json!({ "sender_id": "u1", "slots": { "tracking_order_id": order_id } }),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(
            status.responses[0].text.as_deref(),
            Some(format!("Your order #{order_id} status is: confirmed").as_str())
        );
        assert_eq!(status.events, vec![Event::clear_slot("tracking_order_id")]);
    }
}
