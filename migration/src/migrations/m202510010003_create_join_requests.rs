use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510010003_create_join_requests"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("join_requests"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("requester_id")).big_integer().not_null())
                    .col(
                        ColumnDef::new(Alias::new("candidate_kind"))
                            .enumeration(
                                Alias::new("candidate_kind_type"),
                                vec![Alias::new("user"), Alias::new("chat_room")],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("candidate_id")).big_integer().not_null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(
                                Alias::new("join_request_status_type"),
                                vec![Alias::new("pending"), Alias::new("accepted")],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(
                        ColumnDef::new(Alias::new("updated_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .index(
                        Index::create()
                            .name("uq_join_requests_requester_candidate")
                            .col(Alias::new("requester_id"))
                            .col(Alias::new("candidate_kind"))
                            .col(Alias::new("candidate_id"))
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("join_requests"), Alias::new("requester_id"))
                            .to(Alias::new("profiles"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("join_requests")).to_owned())
            .await
    }
}
