use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("Invalid pagination: take={take} skip={skip}")]
    InvalidPagination { take: i64, skip: i64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;
