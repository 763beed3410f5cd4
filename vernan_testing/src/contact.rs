use std::{collections::HashSet, net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use vernan_models::contact::ContactRequest;

pub const CONTACT_ROUTE: &str = "/api/contact-us/";

/// Names that trigger a rejection without a usable JSON message.
pub const REJECT_PLAIN_NAME: &str = "reject-plain";
pub const REJECT_EMPTY_NAME: &str = "reject-empty";

pub const DUPLICATE_MESSAGE: &str = "Duplicate entry";

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting contact testing server on {host}:{port}");
    info!("Contact endpoint: http://{host}:{port}{CONTACT_ROUTE}");
    info!(
        "Every email address is accepted once, repeated submissions are rejected with \
         {DUPLICATE_MESSAGE:?}. The names {REJECT_PLAIN_NAME:?} and {REJECT_EMPTY_NAME:?} are \
         rejected with a plain text and an empty JSON body respectively."
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router())
        .await
        .context("Failed to start HTTP server")
}

pub fn router() -> Router<()> {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(contact_us))
        .with_state(Arc::new(Submissions::default()))
}

#[derive(Debug, Default)]
struct Submissions {
    emails: Mutex<HashSet<String>>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn contact_us(
    State(submissions): State<Arc<Submissions>>,
    Json(request): Json<ContactRequest>,
) -> Response {
    match request.name.as_str() {
        REJECT_PLAIN_NAME => {
            return (StatusCode::BAD_REQUEST, "rejected").into_response();
        }
        REJECT_EMPTY_NAME => {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(serde_json::json!({})))
                .into_response();
        }
        _ => {}
    }

    if !submissions.emails.lock().await.insert(request.email.clone()) {
        info!("Rejecting duplicate submission from {}", request.email);
        return (
            StatusCode::CONFLICT,
            Json(MessageResponse {
                message: DUPLICATE_MESSAGE,
            }),
        )
            .into_response();
    }

    info!(
        "Received message from {} ({}, {}): {:?}",
        request.name, request.email, request.phone, request.message
    );
    Json(MessageResponse {
        message: "Thank you for contacting us",
    })
    .into_response()
}
