use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

use crate::{
    db::dao::{RegistrationEntry, ResultEntry, SeatEntry, UserProfile},
    db::entities::{cash_game, role, team, tournament, user},
    services::CreateUser,
};

fn utc(at: DateTime<FixedOffset>) -> DateTime<Utc> {
    at.with_timezone(&Utc)
}

/// A player account. Relation fields are `null` when the resolver that
/// produced the user did not load them.
#[derive(SimpleObject, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub role: Option<Role>,
    pub team: Option<Team>,
    pub tournament_registrations: Option<Vec<TournamentRegistration>>,
    pub tournament_results: Option<Vec<TournamentResult>>,
    pub cash_game_played: Option<Vec<CashGamePlayer>>,
    pub cash_game_organized: Option<Vec<CashGame>>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub buy_in: i64,
    pub starts_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct TournamentRegistration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tournament_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub tournament: Option<Tournament>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct TournamentResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tournament_id: Uuid,
    pub position: i32,
    pub prize: i64,
    pub created_at: DateTime<Utc>,
    pub tournament: Option<Tournament>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct CashGame {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub name: String,
    pub stakes: String,
    pub started_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct CashGamePlayer {
    pub id: Uuid,
    pub cash_game_id: Uuid,
    pub user_id: Uuid,
    pub buy_in: i64,
    pub cash_out: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub cash_game: Option<CashGame>,
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateUserInput {
    pub email: String,
    #[graphql(secret)]
    pub password: String,
    pub name: Option<String>,
    pub role_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

impl From<CreateUserInput> for CreateUser {
    fn from(input: CreateUserInput) -> Self {
        Self {
            email: input.email,
            password: input.password,
            name: input.name,
            role_id: input.role_id,
            team_id: input.team_id,
        }
    }
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            role_id: model.role_id,
            team_id: model.team_id,
            created_at: utc(model.created_at),
            updated_at: utc(model.updated_at),
            role: None,
            team: None,
            tournament_registrations: None,
            tournament_results: None,
            cash_game_played: None,
            cash_game_organized: None,
        }
    }
}

impl From<UserProfile> for User {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            user,
            role,
            team,
            tournament_registrations,
            tournament_results,
            cash_games_played,
            cash_games_organized,
        } = profile;

        Self {
            role: role.map(Into::into),
            team: team.map(Into::into),
            tournament_registrations: Some(
                tournament_registrations.into_iter().map(Into::into).collect(),
            ),
            tournament_results: Some(tournament_results.into_iter().map(Into::into).collect()),
            cash_game_played: Some(cash_games_played.into_iter().map(Into::into).collect()),
            cash_game_organized: Some(cash_games_organized.into_iter().map(Into::into).collect()),
            ..User::from(user)
        }
    }
}

impl From<role::Model> for Role {
    fn from(model: role::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: utc(model.created_at),
        }
    }
}

impl From<team::Model> for Team {
    fn from(model: team::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: utc(model.created_at),
        }
    }
}

impl From<tournament::Model> for Tournament {
    fn from(model: tournament::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            buy_in: model.buy_in,
            starts_at: model.starts_at.map(utc),
            created_at: utc(model.created_at),
        }
    }
}

impl From<RegistrationEntry> for TournamentRegistration {
    fn from(entry: RegistrationEntry) -> Self {
        let RegistrationEntry {
            registration,
            tournament,
        } = entry;
        Self {
            id: registration.id,
            user_id: registration.user_id,
            tournament_id: registration.tournament_id,
            created_at: utc(registration.created_at),
            tournament: tournament.map(Into::into),
        }
    }
}

impl From<ResultEntry> for TournamentResult {
    fn from(entry: ResultEntry) -> Self {
        let ResultEntry { result, tournament } = entry;
        Self {
            id: result.id,
            user_id: result.user_id,
            tournament_id: result.tournament_id,
            position: result.position,
            prize: result.prize,
            created_at: utc(result.created_at),
            tournament: tournament.map(Into::into),
        }
    }
}

impl From<cash_game::Model> for CashGame {
    fn from(model: cash_game::Model) -> Self {
        Self {
            id: model.id,
            organizer_id: model.organizer_id,
            name: model.name,
            stakes: model.stakes,
            started_at: model.started_at.map(utc),
            created_at: utc(model.created_at),
        }
    }
}

impl From<SeatEntry> for CashGamePlayer {
    fn from(entry: SeatEntry) -> Self {
        let SeatEntry { seat, cash_game } = entry;
        Self {
            id: seat.id,
            cash_game_id: seat.cash_game_id,
            user_id: seat.user_id,
            buy_in: seat.buy_in,
            cash_out: seat.cash_out,
            created_at: utc(seat.created_at),
            cash_game: cash_game.map(Into::into),
        }
    }
}
