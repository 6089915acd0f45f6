use crate::api::ApiResult;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{Extension, Json},
    response::{Html, IntoResponse},
};
use serde_json::{json, Value};
use starwars_graphql::schema::StarWarsSchema;
use std::{sync::Arc, time::Instant};

pub(crate) async fn query_graph(
    Extension(schema): Extension<StarWarsSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub(crate) async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(
        GraphQLPlaygroundConfig::new("/graphql").subscription_endpoint("/websocket"),
    ))
}

pub(crate) async fn health_check(
    Extension(start_time): Extension<Arc<Instant>>,
) -> ApiResult<axum::Json<Value>> {
    let uptime = start_time.elapsed().as_secs().to_string();

    Ok(Json(json!({
        "status": "ok",
        "uptime(seconds)": uptime,
    })))
}
