use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Minor currency units.
    pub buy_in: i64,
    pub starts_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(has_many)]
    pub registrations: HasMany<super::tournament_registration::Entity>,
    #[sea_orm(has_many)]
    pub results: HasMany<super::tournament_result::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
