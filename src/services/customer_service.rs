use crate::entities::customer_entity as customers;
use crate::error::AppResult;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

#[derive(Clone)]
pub struct CustomerService {
    pool: DatabaseConnection,
}

impl CustomerService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 写入手机号与验证PIN；同一 sender_id 已存在时覆盖这两列
    pub async fn upsert_pin(
        &self,
        sender_id: &str,
        mobile_number: Option<&str>,
        pin: &str,
    ) -> AppResult<()> {
        let customer = customers::ActiveModel {
            sender_id: Set(sender_id.to_string()),
            mobile_number: Set(mobile_number.map(str::to_string)),
            verification_pin: Set(Some(pin.to_string())),
            address: Set(None),
        };

        customers::Entity::insert(customer)
            .on_conflict(
                OnConflict::column(customers::Column::SenderId)
                    .update_columns([
                        customers::Column::MobileNumber,
                        customers::Column::VerificationPin,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_customer(&self, sender_id: &str) -> AppResult<Option<customers::Model>> {
        let customer = customers::Entity::find_by_id(sender_id.to_string())
            .one(&self.pool)
            .await?;
        Ok(customer)
    }

    /// 输入的PIN与已存PIN完全一致才通过；没有顾客记录视为不通过
    pub async fn verify_pin(&self, sender_id: &str, entered: &str) -> AppResult<bool> {
        let stored = self
            .find_customer(sender_id)
            .await?
            .and_then(|c| c.verification_pin);
        Ok(stored.as_deref() == Some(entered))
    }

    /// 更新收货地址，返回受影响的行数（顾客记录不存在时为 0）
    pub async fn update_address(&self, sender_id: &str, address: Option<&str>) -> AppResult<u64> {
        let result = customers::Entity::update_many()
            .col_expr(
                customers::Column::Address,
                Expr::value(address.map(str::to_string)),
            )
            .filter(customers::Column::SenderId.eq(sender_id))
            .exec(&self.pool)
            .await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_upsert_pin_keeps_single_row() {
        let pool = test_pool().await;
        let service = CustomerService::new(pool.clone());

        service.upsert_pin("u1", Some("1234567890"), "0042").await.unwrap();
        service.upsert_pin("u1", Some("0987654321"), "9876").await.unwrap();

        let count = customers::Entity::find().count(&pool).await.unwrap();
        assert_eq!(count, 1);

        let customer = service.find_customer("u1").await.unwrap().unwrap();
        assert_eq!(customer.verification_pin.as_deref(), Some("9876"));
        assert_eq!(customer.mobile_number.as_deref(), Some("0987654321"));
    }

    #[tokio::test]
    async fn test_upsert_pin_preserves_address() {
        let service = CustomerService::new(test_pool().await);
        service.upsert_pin("u1", Some("1234567890"), "1111").await.unwrap();
        let affected = service
            .update_address("u1", Some("221B Baker Street"))
            .await
            .unwrap();
        assert_eq!(affected, 1);
        service.upsert_pin("u1", Some("1234567890"), "2222").await.unwrap();

        let customer = service.find_customer("u1").await.unwrap().unwrap();
        assert_eq!(customer.address.as_deref(), Some("221B Baker Street"));
    }

    #[tokio::test]
    async fn test_verify_pin() {
        let service = CustomerService::new(test_pool().await);
        assert!(!service.verify_pin("u1", "0042").await.unwrap());

        service.upsert_pin("u1", Some("1234567890"), "0042").await.unwrap();
        assert!(service.verify_pin("u1", "0042").await.unwrap());
        assert!(!service.verify_pin("u1", "42").await.unwrap());
        assert!(!service.verify_pin("u1", "0042 ").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_address_without_customer_touches_nothing() {
        let pool = test_pool().await;
        let service = CustomerService::new(pool.clone());
        let affected = service
            .update_address("ghost", Some("221B Baker Street"))
            .await
            .unwrap();
        assert_eq!(affected, 0);
        assert_eq!(customers::Entity::find().count(&pool).await.unwrap(), 0);
    }
}
