//! The inbound WhatsApp webhook.
//!
//! The transport delivers `application/x-www-form-urlencoded` fields with
//! indexed media keys (`MediaUrl0`, `MediaContentType0`, ...), so the body is
//! collected as a string map before being normalized into an
//! `IncomingMessage`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;

use linkdrop_core::{Attachment, IncomingMessage};
use linkdrop_router::CommandRouter;

use crate::twiml;

#[derive(Clone)]
struct AppState {
    router: Arc<CommandRouter>,
}

pub fn build_router(command_router: Arc<CommandRouter>) -> Router {
    let state = AppState {
        router: command_router,
    };
    Router::new()
        .route("/webhook/whatsapp", post(handle_webhook))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

async fn handle_webhook(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let message = parse_incoming(&fields);
    info!(
        sender = %message.sender,
        attachments = message.attachments.len(),
        "webhook message received"
    );

    let reply = state.router.handle(&message).await;
    let body = twiml::message_response(&reply.render());
    ([(header::CONTENT_TYPE, "text/xml")], body)
}

/// Most media items accepted from a single message. The transport sends at
/// most 10; anything above that is a forged count, and the endpoint is
/// unauthenticated, so the client-supplied value must not bound the loop.
const MAX_MEDIA_ITEMS: usize = 10;

/// Normalize the transport's form fields into an `IncomingMessage`.
fn parse_incoming(fields: &HashMap<String, String>) -> IncomingMessage {
    let num_media = fields
        .get("NumMedia")
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(0)
        .min(MAX_MEDIA_ITEMS);

    let attachments = (0..num_media)
        .filter_map(|i| {
            fields.get(&format!("MediaUrl{i}")).map(|url| Attachment {
                url: url.clone(),
                content_type: fields.get(&format!("MediaContentType{i}")).cloned(),
            })
        })
        .collect();

    IncomingMessage {
        sender: fields.get("From").cloned().unwrap_or_default(),
        body: fields.get("Body").cloned().unwrap_or_default(),
        attachments,
    }
}
