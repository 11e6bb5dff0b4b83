use crate::entities::{OrderStatus, order_entity as orders};
use crate::error::AppResult;
use crate::utils::generate_order_id;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;

/// 订单号冲突时最多重试次数
const MAX_ORDER_ID_ATTEMPTS: usize = 5;

type OrderIdSource = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct OrderService {
    pool: DatabaseConnection,
    next_order_id: OrderIdSource,
}

impl OrderService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self::with_id_source(pool, generate_order_id)
    }

    /// 指定订单号来源，默认是随机四位数
    pub fn with_id_source<F>(pool: DatabaseConnection, next_order_id: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            pool,
            next_order_id: Arc::new(next_order_id),
        }
    }

    /// 创建待支付订单；主键冲突时换号重试
    pub async fn create_order(&self, sender_id: &str, item: &str) -> AppResult<orders::Model> {
        let mut last_err: Option<DbErr> = None;

        for attempt in 1..=MAX_ORDER_ID_ATTEMPTS {
            let order_id = (self.next_order_id)();
            let result = orders::ActiveModel {
                order_id: Set(order_id.clone()),
                sender_id: Set(sender_id.to_string()),
                item: Set(item.to_string()),
                status: Set(OrderStatus::Pending),
                created_at: Set(Utc::now()),
            }
            .insert(&self.pool)
            .await;

            match result {
                Ok(order) => {
                    log::info!("Created order {} for sender {}", order.order_id, sender_id);
                    return Ok(order);
                }
                Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    log::warn!("Order id {order_id} already taken (attempt {attempt})");
                    last_err = Some(e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(last_err
            .unwrap_or_else(|| DbErr::Custom("order id allocation failed".to_string()))
            .into())
    }

    pub async fn find_order(&self, order_id: &str) -> AppResult<Option<orders::Model>> {
        let order = orders::Entity::find_by_id(order_id.to_string())
            .one(&self.pool)
            .await?;
        Ok(order)
    }

    pub async fn order_exists(&self, order_id: &str) -> AppResult<bool> {
        Ok(self.find_order(order_id).await?.is_some())
    }

    /// 确认该会话最近的一笔待支付订单。
    /// 读取与更新在同一事务内完成；没有待支付订单时返回 None 且不写库。
    pub async fn confirm_latest_pending(&self, sender_id: &str) -> AppResult<Option<orders::Model>> {
        let txn = self.pool.begin().await?;

        let pending = orders::Entity::find()
            .filter(orders::Column::SenderId.eq(sender_id))
            .filter(orders::Column::Status.eq(OrderStatus::Pending))
            .order_by_desc(orders::Column::CreatedAt)
            .one(&txn)
            .await?;

        let Some(order) = pending else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut am = order.into_active_model();
        am.status = Set(OrderStatus::Confirmed);
        let confirmed = am.update(&txn).await?;

        txn.commit().await?;
        log::info!(
            "Order {} confirmed for sender {}",
            confirmed.order_id,
            sender_id
        );
        Ok(Some(confirmed))
    }
}
