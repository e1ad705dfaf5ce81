//! WebSocket upgrade handler.
//!
//! Subscribers receive every outbound monitor event as a JSON text frame.
//! The feed is one-way; inbound text frames are ignored.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::state::AppState;

/// GET /ws — WebSocket upgrade
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_connection(state, socket))
}

/// Forwards hub events to the socket until either side closes.
async fn handle_connection(state: AppState, socket: WebSocket) {
    let mut events = state.hub.subscribe();
    let (mut ws_tx, mut ws_rx) = socket.split();

    debug!("WebSocket subscriber connected");

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        let text = match serde_json::to_string(&event) {
                            Ok(text) => text,
                            Err(e) => {
                                warn!(error = %e, "Failed to serialize event");
                                continue;
                            }
                        };
                        if ws_tx.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(missed)) => {
                        warn!(missed, "WebSocket subscriber lagged, events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            inbound = ws_rx.next() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!(error = %e, "WebSocket error");
                        break;
                    }
                }
            }
        }
    }

    debug!("WebSocket subscriber disconnected");
}
