use crate::uses::{graphql_playground, health_check, query_graph};
use async_graphql_axum::GraphQLSubscription;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Error as AxumError, Router,
};
use hyper::Error as HyperError;
use serde_json::json;
use starwars_graphql::schema::StarWarsSchema;
use starwars_lib::config::ApiServerConfig;
use std::{sync::Arc, time::Instant};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

pub type ApiResult<T> = core::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Bad request.")]
    BadRequest,
    #[error("Not found. {0:#?}")]
    NotFound(String),
    #[error("Error.")]
    InternalServer,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Serialization error {0:?}")]
    Serde(#[from] serde_json::Error),
    #[error("Http error {0:?}")]
    Http(#[from] HttpError),
    #[error("Axum error: {0:?}")]
    AxumError(#[from] AxumError),
    #[error("Hyper error: {0:?}")]
    HyperError(#[from] HyperError),
}

impl Default for ApiError {
    fn default() -> Self {
        ApiError::Http(HttpError::InternalServer)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let generic_err_msg = "Internal server error.".to_string();
        // NOTE: Free to add more specific messaging/handling here as needed
        #[allow(clippy::match_single_binding)]
        let (status, err_msg) = match self {
            _ => (StatusCode::INTERNAL_SERVER_ERROR, generic_err_msg),
        };

        error!("{:?} - {}", status, err_msg);

        (
            status,
            Json(json!({
                "success": "false",
                "details": err_msg,
            })),
        )
            .into_response()
    }
}

pub struct GraphQlApi;

impl GraphQlApi {
    pub async fn build_and_run(
        config: ApiServerConfig,
        schema: StarWarsSchema,
    ) -> ApiResult<()> {
        let start_time = Arc::new(Instant::now());
        let listen_on = config.graphql_api.derive_socket_addr();

        let graph_route = Router::new()
            .route("/graphql", post(query_graph).get(graphql_playground))
            .route_service("/websocket", GraphQLSubscription::new(schema.clone()))
            .layer(Extension(schema));

        let health_route = Router::new()
            .route("/health", get(health_check))
            .layer(Extension(start_time));

        let app = Router::new()
            .merge(graph_route)
            .nest("/api", health_route)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );

        info!("Server ready at http://{listen_on}/graphql");
        info!("Subscriptions ready at ws://{listen_on}/websocket");

        axum::Server::bind(&listen_on)
            .serve(app.into_make_service())
            .await?;

        Ok(())
    }
}
