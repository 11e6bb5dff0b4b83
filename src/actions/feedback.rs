use super::greeting::main_menu_buttons;
use super::tracking::ORDER_NOT_FOUND;
use super::{Action, ActionContext, Dispatcher, FormValidator};
use crate::models::Event;
use crate::services::{FeedbackService, OrderService};
use crate::utils::is_non_empty_feedback;
use async_trait::async_trait;

pub const FEEDBACK_ORDER_ID_SLOT: &str = "feedback_order_id";
pub const FEEDBACK_TEXT_SLOT: &str = "feedback_text";

pub struct ActionAskOrderIdForFeedback;

#[async_trait]
impl Action for ActionAskOrderIdForFeedback {
    fn name(&self) -> &'static str {
        "action_ask_order_id_for_feedback"
    }

    async fn run(&self, _ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        dispatcher.utter_message("Please provide your order ID to give feedback.");
        Vec::new()
    }
}

pub struct ValidateFeedbackForm {
    orders: OrderService,
}

impl ValidateFeedbackForm {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }

    async fn validate_order_id(&self, value: &str, dispatcher: &mut Dispatcher) -> Option<String> {
        match self.orders.order_exists(value).await {
            Ok(true) => {
                // 订单号有效时顺带提示用户填写反馈
                dispatcher.utter_message("Great! Now please share your feedback about your order.");
                Some(value.to_string())
            }
            Ok(false) => {
                dispatcher.utter_message(ORDER_NOT_FOUND);
                None
            }
            Err(e) => {
                log::error!("Database error: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl FormValidator for ValidateFeedbackForm {
    fn form_name(&self) -> &'static str {
        "validate_feedback_form"
    }

    fn slots(&self) -> &'static [&'static str] {
        &[FEEDBACK_ORDER_ID_SLOT, FEEDBACK_TEXT_SLOT]
    }

    async fn validate_slot(
        &self,
        slot: &str,
        value: &str,
        _ctx: &ActionContext<'_>,
        dispatcher: &mut Dispatcher,
    ) -> Option<String> {
        match slot {
            FEEDBACK_ORDER_ID_SLOT => self.validate_order_id(value, dispatcher).await,
            _ if is_non_empty_feedback(value) => Some(value.to_string()),
            _ => {
                dispatcher.utter_message("Please provide some feedback text.");
                None
            }
        }
    }
}

pub struct ActionAskFeedback;

#[async_trait]
impl Action for ActionAskFeedback {
    fn name(&self) -> &'static str {
        "action_ask_feedback"
    }

    async fn run(&self, _ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        dispatcher.utter_message("Please share your feedback about your order.");
        Vec::new()
    }
}

/// 保存反馈；无论成功与否都清空两个反馈槽位
pub struct ActionSaveFeedback {
    feedback: FeedbackService,
}

impl ActionSaveFeedback {
    pub fn new(feedback: FeedbackService) -> Self {
        Self { feedback }
    }
}

#[async_trait]
impl Action for ActionSaveFeedback {
    fn name(&self) -> &'static str {
        "action_save_feedback"
    }

    async fn run(&self, ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        let order_id = ctx.tracker.get_slot(FEEDBACK_ORDER_ID_SLOT);
        let text = ctx.tracker.get_slot(FEEDBACK_TEXT_SLOT);

        match (order_id, text) {
            (Some(order_id), Some(text)) => {
                match self.feedback.save_feedback(&order_id, &text).await {
                    Ok(_) => dispatcher.utter_with_buttons(
                        "Thank you for your feedback! Is there anything else I can help you with?",
                        main_menu_buttons(),
                    ),
                    Err(e) => log::error!("Database error: {e}"),
                }
            }
            // 槽位不全时不写入空行，也不致谢；两个槽位照常清空
            _ => log::warn!(
                "Feedback slots incomplete for sender {}, nothing saved",
                ctx.sender_id()
            ),
        }

        vec![
            Event::clear_slot(FEEDBACK_ORDER_ID_SLOT),
            Event::clear_slot(FEEDBACK_TEXT_SLOT),
        ]
    }
}
