use crate::entities::feedback_entity as feedback;
use crate::error::AppResult;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

#[derive(Clone)]
pub struct FeedbackService {
    pool: DatabaseConnection,
}

impl FeedbackService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn save_feedback(&self, order_id: &str, text: &str) -> AppResult<feedback::Model> {
        let saved = feedback::ActiveModel {
            order_id: Set(order_id.to_string()),
            feedback_text: Set(text.to_string()),
            timestamp: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn test_save_feedback_adds_one_row() {
        let pool = test_pool().await;
        let service = FeedbackService::new(pool.clone());
        service.save_feedback("9999", "cold fries").await.unwrap();

        let before = feedback::Entity::find().count(&pool).await.unwrap();
        let saved = service.save_feedback("1234", "great food").await.unwrap();
        let after = feedback::Entity::find().count(&pool).await.unwrap();

        assert_eq!(after, before + 1);
        let rows = feedback::Entity::find()
            .filter(feedback::Column::OrderId.eq("1234"))
            .all(&pool)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].feedback_text, "great food");
        assert_eq!(rows[0].feedback_id, saved.feedback_id);
    }
}
