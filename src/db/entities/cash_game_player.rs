use sea_orm::entity::prelude::*;

/// One player's seat in a cash game.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cash_game_players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub cash_game_id: Uuid,
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    pub buy_in: i64,
    pub cash_out: Option<i64>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(belongs_to, from = "cash_game_id", to = "id", on_delete = "Cascade")]
    pub cash_game: HasOne<super::cash_game::Entity>,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
