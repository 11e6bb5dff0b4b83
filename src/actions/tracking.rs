use super::greeting::main_menu_buttons;
use super::{Action, ActionContext, Dispatcher, FormValidator};
use crate::models::Event;
use crate::services::OrderService;
use async_trait::async_trait;

pub const TRACKING_ORDER_ID_SLOT: &str = "tracking_order_id";

pub const ORDER_NOT_FOUND: &str =
    "Sorry, I couldn't find an order with that ID. Please check and try again.";

pub struct ActionAskOrderIdForTracking;

#[async_trait]
impl Action for ActionAskOrderIdForTracking {
    fn name(&self) -> &'static str {
        "action_ask_order_id_for_tracking"
    }

    async fn run(&self, _ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        dispatcher.utter_message("Please provide your order ID to track your order.");
        Vec::new()
    }
}

pub struct ValidateOrderTrackingForm {
    orders: OrderService,
}

impl ValidateOrderTrackingForm {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl FormValidator for ValidateOrderTrackingForm {
    fn form_name(&self) -> &'static str {
        "validate_order_tracking_form"
    }

    fn slots(&self) -> &'static [&'static str] {
        &[TRACKING_ORDER_ID_SLOT]
    }

    async fn validate_slot(
        &self,
        _slot: &str,
        value: &str,
        _ctx: &ActionContext<'_>,
        dispatcher: &mut Dispatcher,
    ) -> Option<String> {
        match self.orders.order_exists(value).await {
            Ok(true) => Some(value.to_string()),
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

/// 查询订单状态；无论结果如何都清空 tracking_order_id
pub struct ActionCheckOrderStatus {
    orders: OrderService,
}

impl ActionCheckOrderStatus {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl Action for ActionCheckOrderStatus {
    fn name(&self) -> &'static str {
        "action_check_order_status"
    }

    async fn run(&self, ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        let order = match ctx.tracker.get_slot(TRACKING_ORDER_ID_SLOT) {
            Some(order_id) => self.orders.find_order(&order_id).await,
            None => Ok(None),
        };

        match order {
            Ok(Some(order)) => dispatcher.utter_with_buttons(
                format!("Your order #{} status is: {}", order.order_id, order.status),
                main_menu_buttons(),
            ),
            Ok(None) => dispatcher.utter_message(ORDER_NOT_FOUND),
            Err(e) => log::error!("Database error: {e}"),
        }

        vec![Event::clear_slot(TRACKING_ORDER_ID_SLOT)]
    }
}
