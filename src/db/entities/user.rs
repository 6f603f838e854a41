use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    #[sea_orm(indexed)]
    pub role_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub team_id: Option<Uuid>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(belongs_to, from = "role_id", to = "id", on_delete = "SetNull")]
    pub role: HasOne<super::role::Entity>,
    #[sea_orm(belongs_to, from = "team_id", to = "id", on_delete = "SetNull")]
    pub team: HasOne<super::team::Entity>,
    #[sea_orm(has_many)]
    pub tournament_registrations: HasMany<super::tournament_registration::Entity>,
    #[sea_orm(has_many)]
    pub tournament_results: HasMany<super::tournament_result::Entity>,
    #[sea_orm(has_many)]
    pub cash_game_seats: HasMany<super::cash_game_player::Entity>,
    #[sea_orm(has_many)]
    pub organized_cash_games: HasMany<super::cash_game::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
