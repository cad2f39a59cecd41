use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20220710_000001_create_inbound_orders_table::Migration,
        )]
    }
}

mod m20220710_000001_create_inbound_orders_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20220710_000001_create_inbound_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Columns in the order rows are read back: id first, then the payload fields
            manager
                .create_table(
                    Table::create()
                        .table(InboundOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InboundOrders::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(InboundOrders::OrderDate).string().not_null())
                        .col(
                            ColumnDef::new(InboundOrders::OrderNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InboundOrders::EmployeeId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InboundOrders::ProductBatchId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InboundOrders::WarehouseId)
                                .big_integer()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InboundOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum InboundOrders {
        Table,
        Id,
        OrderDate,
        OrderNumber,
        EmployeeId,
        ProductBatchId,
        WarehouseId,
    }
}
