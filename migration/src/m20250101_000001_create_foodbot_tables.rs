use sea_orm_migration::prelude::*;

/// 顾客（以会话 sender_id 为主键）
#[derive(DeriveIden)]
enum Customers {
    Table,
    SenderId,
    MobileNumber,
    VerificationPin,
    Address,
}

/// 订单
#[derive(DeriveIden)]
enum Orders {
    Table,
    OrderId,
    SenderId,
    Item,
    Status,
    CreatedAt,
}

/// 订单反馈（只写不读）
#[derive(DeriveIden)]
enum Feedback {
    Table,
    FeedbackId,
    OrderId,
    FeedbackText,
    Timestamp,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// orders.sender_id 与 feedback.order_id 只是逻辑引用：
/// 下单发生在顾客记录创建之前，因此不建外键约束。
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::SenderId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::MobileNumber).string().null())
                    .col(ColumnDef::new(Customers::VerificationPin).string().null())
                    .col(ColumnDef::new(Customers::Address).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::OrderId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::SenderId).string().not_null())
                    .col(ColumnDef::new(Orders::Item).text().not_null())
                    .col(
                        ColumnDef::new(Orders::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 查找某个会话的待支付订单
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_sender_status")
                    .table(Orders::Table)
                    .col(Orders::SenderId)
                    .col(Orders::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedback::FeedbackId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedback::OrderId).string().not_null())
                    .col(ColumnDef::new(Feedback::FeedbackText).text().not_null())
                    .col(
                        ColumnDef::new(Feedback::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        Ok(())
    }
}
