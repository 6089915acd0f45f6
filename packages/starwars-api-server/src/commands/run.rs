use crate::api::GraphQlApi;
use starwars_graphql::{pubsub::ReviewPublisher, schema::build_schema, store::Store};
use starwars_lib::{
    config::{ApiServerArgs, ApiServerConfig},
    defaults,
    utils::init_logging,
};
use tracing::info;

pub async fn exec(args: ApiServerArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => ApiServerConfig::from_file(path)?,
        None => ApiServerConfig::from(args),
    };

    init_logging(&config)?;

    info!("Configuration: {:?}", config);

    let store = Store::new();
    let publisher = ReviewPublisher::new(defaults::REVIEW_CHANNEL_SIZE);
    let schema = build_schema(store, publisher);

    let _ = GraphQlApi::build_and_run(config, schema).await;

    Ok(())
}
