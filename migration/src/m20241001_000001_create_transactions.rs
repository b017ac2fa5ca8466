use sea_orm_migration::prelude::*;

/// Transactions (从第三方数据源整批导入的销售记录)
#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    Title,
    Description,
    Price,
    DateOfSale,
    Category,
    Sold,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Title)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Transactions::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Transactions::Price).double().not_null())
                    .col(
                        ColumnDef::new(Transactions::DateOfSale)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Category)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Transactions::Sold)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .check(Expr::col(Transactions::Price).gte(0))
                    .to_owned(),
            )
            .await?;

        // 所有统计接口都按销售月份过滤
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_transactions_date_of_sale")
                    .table(Transactions::Table)
                    .col(Transactions::DateOfSale)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}
