use std::collections::{HashMap, HashSet};

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult, UserDao};
use crate::db::entities::{
    cash_game, cash_game_player,
    prelude::{
        CashGame, CashGamePlayer, Role, Team, Tournament, TournamentRegistration, TournamentResult,
    },
    role, team, tournament, tournament_registration, tournament_result, user,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationEntry {
    pub registration: tournament_registration::Model,
    pub tournament: Option<tournament::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub result: tournament_result::Model,
    pub tournament: Option<tournament::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatEntry {
    pub seat: cash_game_player::Model,
    pub cash_game: Option<cash_game::Model>,
}

/// A user with every relation the listing and detail views show. All
/// relation lists are newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: user::Model,
    pub role: Option<role::Model>,
    pub team: Option<team::Model>,
    pub tournament_registrations: Vec<RegistrationEntry>,
    pub tournament_results: Vec<ResultEntry>,
    pub cash_games_played: Vec<SeatEntry>,
    pub cash_games_organized: Vec<cash_game::Model>,
}

impl UserDao {
    /// Loads relations for `users` with one batched query per relation,
    /// keeping the input order of `users`.
    ///
    /// Query order: roles, teams, registrations, results, tournaments,
    /// cash game seats, the seats' cash games, organized cash games.
    /// Lookups by id are skipped when there is nothing to look up.
    pub async fn load_profiles(&self, users: Vec<user::Model>) -> DaoResult<Vec<UserProfile>> {
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let db = self.db();
        let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();

        let role_ids = distinct(users.iter().filter_map(|u| u.role_id));
        let mut roles = HashMap::new();
        if !role_ids.is_empty() {
            roles = index_by(
                Role::find()
                    .filter(role::Column::Id.is_in(role_ids))
                    .all(db)
                    .await
                    .map_err(DaoLayerError::Db)?,
                |r| r.id,
            );
        }

        let team_ids = distinct(users.iter().filter_map(|u| u.team_id));
        let mut teams = HashMap::new();
        if !team_ids.is_empty() {
            teams = index_by(
                Team::find()
                    .filter(team::Column::Id.is_in(team_ids))
                    .all(db)
                    .await
                    .map_err(DaoLayerError::Db)?,
                |t| t.id,
            );
        }

        let registrations = TournamentRegistration::find()
            .filter(tournament_registration::Column::UserId.is_in(user_ids.clone()))
            .order_by_desc(tournament_registration::Column::CreatedAt)
            .all(db)
            .await
            .map_err(DaoLayerError::Db)?;

        let results = TournamentResult::find()
            .filter(tournament_result::Column::UserId.is_in(user_ids.clone()))
            .order_by_desc(tournament_result::Column::CreatedAt)
            .all(db)
            .await
            .map_err(DaoLayerError::Db)?;

        let tournament_ids = distinct(
            registrations
                .iter()
                .map(|r| r.tournament_id)
                .chain(results.iter().map(|r| r.tournament_id)),
        );
        let mut tournaments = HashMap::new();
        if !tournament_ids.is_empty() {
            tournaments = index_by(
                Tournament::find()
                    .filter(tournament::Column::Id.is_in(tournament_ids))
                    .all(db)
                    .await
                    .map_err(DaoLayerError::Db)?,
                |t| t.id,
            );
        }

        let seats = CashGamePlayer::find()
            .filter(cash_game_player::Column::UserId.is_in(user_ids.clone()))
            .order_by_desc(cash_game_player::Column::CreatedAt)
            .all(db)
            .await
            .map_err(DaoLayerError::Db)?;

        let seat_game_ids = distinct(seats.iter().map(|s| s.cash_game_id));
        let mut seat_games = HashMap::new();
        if !seat_game_ids.is_empty() {
            seat_games = index_by(
                CashGame::find()
                    .filter(cash_game::Column::Id.is_in(seat_game_ids))
                    .all(db)
                    .await
                    .map_err(DaoLayerError::Db)?,
                |g| g.id,
            );
        }

        let organized = CashGame::find()
            .filter(cash_game::Column::OrganizerId.is_in(user_ids))
            .order_by_desc(cash_game::Column::CreatedAt)
            .all(db)
            .await
            .map_err(DaoLayerError::Db)?;

        let mut registrations = group_by(registrations, |r| r.user_id);
        let mut results = group_by(results, |r| r.user_id);
        let mut seats = group_by(seats, |s| s.user_id);
        let mut organized = group_by(organized, |g| g.organizer_id);

        let profiles = users
            .into_iter()
            .map(|user| UserProfile {
                role: user.role_id.and_then(|id| roles.get(&id).cloned()),
                team: user.team_id.and_then(|id| teams.get(&id).cloned()),
                tournament_registrations: registrations
                    .remove(&user.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|registration| RegistrationEntry {
                        tournament: tournaments.get(&registration.tournament_id).cloned(),
                        registration,
                    })
                    .collect(),
                tournament_results: results
                    .remove(&user.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|result| ResultEntry {
                        tournament: tournaments.get(&result.tournament_id).cloned(),
                        result,
                    })
                    .collect(),
                cash_games_played: seats
                    .remove(&user.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|seat| SeatEntry {
                        cash_game: seat_games.get(&seat.cash_game_id).cloned(),
                        seat,
                    })
                    .collect(),
                cash_games_organized: organized.remove(&user.id).unwrap_or_default(),
                user,
            })
            .collect();

        Ok(profiles)
    }
}

fn distinct(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

fn index_by<M>(rows: Vec<M>, key: impl Fn(&M) -> Uuid) -> HashMap<Uuid, M> {
    rows.into_iter().map(|row| (key(&row), row)).collect()
}

// Keeps the fetched order inside each group.
fn group_by<M>(rows: Vec<M>, key: impl Fn(&M) -> Uuid) -> HashMap<Uuid, Vec<M>> {
    let mut groups: HashMap<Uuid, Vec<M>> = HashMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(row);
    }
    groups
}
