pub const GRAPHQL_API_HOST: &str = "127.0.0.1";
pub const GRAPHQL_API_PORT: &str = "4001";

/// Capacity of the broadcast channel that fans reviews out to subscribers.
pub const REVIEW_CHANNEL_SIZE: usize = 100;
