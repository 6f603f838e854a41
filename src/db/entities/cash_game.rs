use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cash_games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub organizer_id: Uuid,
    pub name: String,
    pub stakes: String,
    pub started_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(belongs_to, from = "organizer_id", to = "id", on_delete = "Cascade")]
    pub organizer: HasOne<super::user::Entity>,
    #[sea_orm(has_many)]
    pub players: HasMany<super::cash_game_player::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
