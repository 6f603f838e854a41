use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait, QuerySelect, Select};
use uuid::Uuid;

use super::error::{DaoLayerError, DaoResult};

#[allow(async_fn_in_trait)]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<Uuid> + Send + Sync,
{
    type Entity: EntityTrait + Send + Sync;
    const MAX_PAGE_SIZE: i64 = 100;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    async fn find_by_id(&self, id: Uuid) -> DaoResult<Option<<Self::Entity as EntityTrait>::Model>> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    /// Offset pagination. `take` must be positive and is capped at
    /// `MAX_PAGE_SIZE`; `skip` must be non-negative. Invalid input never
    /// reaches the database.
    async fn find_page(
        &self,
        skip: i64,
        take: i64,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        if take <= 0 || skip < 0 {
            return Err(DaoLayerError::InvalidPagination { take, skip });
        }
        let limit = take.min(Self::MAX_PAGE_SIZE);

        apply(Self::Entity::find())
            .offset(skip as u64)
            .limit(limit as u64)
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }
}
