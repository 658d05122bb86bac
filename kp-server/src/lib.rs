//! HTTP front end for the knapsack solvers.
//!
//! `POST /solve` takes a [`SolveRequest`] and answers with a
//! [`SolveResponse`]; `GET /` serves a small page that drives it.

use kp_algorithms::solve;
use kp_problems::Limits;
use kp_structs::{
    api::{ErrorResponse, SolveRequest, SolveResponse},
    config::ServerConfig,
};
use std::{convert::Infallible, sync::Arc};
use tracing::{error, info, warn};
use warp::{
    http::StatusCode,
    reply::{self, Reply, Response},
    Filter, Rejection,
};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn routes(
    config: Arc<ServerConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .map(|| reply::html(INDEX_HTML));

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| "ok");

    let limits = config.limits;
    let solve = warp::path("solve")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(config.max_body_bytes))
        .and(warp::body::json())
        .and_then(move |request: SolveRequest| handle_solve(request, limits));

    index.or(health).or(solve).recover(handle_rejection)
}

fn json_reply<T: serde::Serialize>(body: &T, status: StatusCode) -> Response {
    reply::with_status(reply::json(body), status).into_response()
}

async fn handle_solve(request: SolveRequest, limits: Limits) -> Result<Response, Rejection> {
    let num_items = request.items.len();
    let capacity = request.capacity;
    info!(items = num_items, capacity, "solve request");

    // Solving is CPU bound; keep it off the async workers
    let outcome = tokio::task::spawn_blocking(move || -> kp_problems::Result<_> {
        let instance = request.into_instance()?;
        solve(&instance, &limits)
    })
    .await;

    Ok(match outcome {
        Ok(Ok(solution)) => {
            info!(
                items = num_items,
                capacity,
                fractional = solution.fractional.total_value,
                zero_one = solution.zero_one.max_value,
                "solved"
            );
            json_reply(&SolveResponse::from(&solution), StatusCode::OK)
        }
        Ok(Err(err)) => {
            warn!(kind = err.kind(), %err, "rejected instance");
            json_reply(&ErrorResponse::from(&err), StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(err) => {
            error!(%err, "solver task failed");
            json_reply(
                &ErrorResponse {
                    error: "Solver task failed".to_string(),
                    kind: "internal".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    })
}

async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, kind, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not_found", "Not found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (
            StatusCode::BAD_REQUEST,
            "bad_request",
            format!("Malformed request body: {}", e),
        )
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            "bad_request",
            "Request body too large".to_string(),
        )
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            "bad_request",
            "Content-Length header required".to_string(),
        )
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "bad_request",
            "Expected application/json".to_string(),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            "Method not allowed".to_string(),
        )
    } else {
        error!(?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            "Internal error".to_string(),
        )
    };
    if status != StatusCode::NOT_FOUND {
        warn!(status = status.as_u16(), %message, "request rejected");
    }
    Ok(json_reply(
        &ErrorResponse {
            error: message,
            kind: kind.to_string(),
        },
        status,
    ))
}
