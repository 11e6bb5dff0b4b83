use super::{Action, ActionContext, Dispatcher};
use crate::models::Event;
use crate::services::OrderService;
use async_trait::async_trait;

/// 记录下单：把用户最新一句话原样作为商品描述，不回复消息
pub struct ActionOrderItem {
    orders: OrderService,
}

impl ActionOrderItem {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl Action for ActionOrderItem {
    fn name(&self) -> &'static str {
        "action_order_item"
    }

    async fn run(&self, ctx: &ActionContext<'_>, _dispatcher: &mut Dispatcher) -> Vec<Event> {
        let Some(item) = ctx.tracker.latest_text() else {
            log::warn!("No message text to order from for sender {}", ctx.sender_id());
            return Vec::new();
        };

        if let Err(e) = self.orders.create_order(ctx.sender_id(), item).await {
            log::error!("Database error: {e}");
        }
        Vec::new()
    }
}

/// 支付确认：把该会话最近的待支付订单标记为已确认
pub struct ActionOrderDone {
    orders: OrderService,
}

impl ActionOrderDone {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl Action for ActionOrderDone {
    fn name(&self) -> &'static str {
        "action_order_done"
    }

    async fn run(&self, ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        match self.orders.confirm_latest_pending(ctx.sender_id()).await {
            Ok(Some(order)) => dispatcher.utter_message(format!(
                "Your order is confirmed and your order ID is {}. Thank you for ordering!",
                order.order_id
            )),
            Ok(None) => dispatcher.utter_message("No pending order found."),
            Err(e) => log::error!("Database error: {e}"),
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{run_action, texts, tracker};
    use crate::database::test_pool;
    use crate::entities::{OrderStatus, order_entity as orders};
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
    use serde_json::json;

    #[tokio::test]
    async fn test_order_item_creates_pending_order_silently() {
        let pool = test_pool().await;
        let action = ActionOrderItem::new(OrderService::new(pool.clone()));

        let (events, messages) =
            run_action(&action, &tracker("u1", Some("Combo 1 - $10"), json!({}))).await;
        assert!(events.is_empty());
        assert!(messages.is_empty());

        let rows = orders::Entity::find()
            .filter(orders::Column::SenderId.eq("u1"))
            .all(&pool)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item, "Combo 1 - $10");
        assert_eq!(rows[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_order_item_swallows_exhausted_order_ids() {
        let pool = test_pool().await;
        let service = OrderService::with_id_source(pool.clone(), || "1111".to_string());
        let action = ActionOrderItem::new(service);

        run_action(&action, &tracker("u1", Some("Combo 1 - $10"), json!({}))).await;
        let (events, messages) =
            run_action(&action, &tracker("u1", Some("Combo 2 - $12"), json!({}))).await;
        assert!(events.is_empty());
        assert!(messages.is_empty());

        let rows = orders::Entity::find().all(&pool).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item, "Combo 1 - $10");
    }

    #[tokio::test]
    async fn test_order_done_without_pending_order() {
        let action = ActionOrderDone::new(OrderService::new(test_pool().await));
        let (events, messages) = run_action(&action, &tracker("u1", None, json!({}))).await;
        assert!(events.is_empty());
        assert_eq!(texts(&messages), vec!["No pending order found."]);
    }

    #[tokio::test]
    async fn test_order_done_reports_order_id() {
        let service = OrderService::new(test_pool().await);
        let order = service.create_order("u1", "Combo 2 - $12").await.unwrap();
        let action = ActionOrderDone::new(service.clone());

        let (_, messages) = run_action(&action, &tracker("u1", None, json!({}))).await;
        let expected = format!(
            "Your order is confirmed and your order ID is {}. Thank you for ordering!",
            order.order_id
        );
        assert_eq!(texts(&messages), vec![expected.as_str()]);
        let stored = service.find_order(&order.order_id).await.unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Confirmed);
    }
}
