/// Entity modules the schema registry syncs at startup.
pub const SCHEMA_REGISTRY: &str = concat!(module_path!(), "::*");

#[allow(unused_imports)]
pub mod prelude {
    pub use super::cash_game::Entity as CashGame;
    pub use super::cash_game_player::Entity as CashGamePlayer;
    pub use super::role::Entity as Role;
    pub use super::team::Entity as Team;
    pub use super::tournament::Entity as Tournament;
    pub use super::tournament_registration::Entity as TournamentRegistration;
    pub use super::tournament_result::Entity as TournamentResult;
    pub use super::user::Entity as User;
}

pub mod cash_game;
pub mod cash_game_player;
pub mod role;
pub mod team;
pub mod tournament;
pub mod tournament_registration;
pub mod tournament_result;
pub mod user;
