pub mod models;
pub mod pubsub;
pub mod schema;
pub mod store;
pub mod util;

use thiserror::Error;

pub type GraphqlResult<T> = Result<T, GraphqlError>;

#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("Paging error: {0}")]
    Paging(#[from] util::PagingError),
    #[error("A review must be filed against an episode.")]
    ReviewWithoutEpisode,
}
