use axum::{
    Extension, Router,
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::Response,
    routing::get,
};
use chrono::Utc;
use uuid::Uuid;

use crate::access_control::domain::model::entities::identity_context::{
    IdentityContext, VerifiedSession,
};

pub fn router() -> Router {
    Router::new().route("/api/v1/notifications/stream", get(notification_stream))
}

// Both extensions are inserted by the websocket guard before the upgrade; the
// raw session travels with the connection for its whole lifetime.
pub async fn notification_stream(
    ws: WebSocketUpgrade,
    Extension(identity): Extension<IdentityContext>,
    Extension(session): Extension<VerifiedSession>,
) -> Response {
    ws.on_upgrade(move |socket| stream_connection(socket, identity, session))
}

async fn stream_connection(
    mut socket: WebSocket,
    identity: IdentityContext,
    session: VerifiedSession,
) {
    let connection_id = Uuid::new_v4();

    tracing::debug!(
        %connection_id,
        subject_id = %identity.subject_id.value(),
        role = %identity.role.value(),
        "notification stream connected"
    );

    let greeting = serde_json::json!({
        "event": "connected",
        "subject_id": identity.subject_id.value(),
        "role": identity.role.value(),
        "session_id": session.session_claims.session_id,
        "session_expires_at": session.session_claims.expires_at.to_rfc3339(),
    });

    if socket.send(Message::Text(greeting.to_string())).await.is_err() {
        return;
    }

    while let Some(Ok(message)) = socket.recv().await {
        // The connection must not outlive the verified session.
        if Utc::now() >= session.session_claims.expires_at {
            let _ = socket.send(Message::Close(None)).await;
            break;
        }

        match message {
            Message::Ping(payload) => {
                if socket.send(Message::Pong(payload)).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    tracing::debug!(%connection_id, "notification stream closed");
}
