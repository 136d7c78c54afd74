// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversation endpoint.
//!
//! Stateless on the server: the client echoes back the `state` it received
//! with its next message.

use crate::error::ApiError;
use crate::types::{DialogRequest, DialogResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

/// POST /api/v1/dialog - Advance a conversation by one message.
pub async fn step(
    State(state): State<AppState>,
    payload: Result<Json<DialogRequest>, JsonRejection>,
) -> Result<Json<DialogResponse>, ApiError> {
    let Json(request) = payload?;

    let transition = state.dialog.step(request.state, &request.message);
    tracing::debug!(
        next = ?transition.state,
        replies = transition.replies.len(),
        "Dialog step"
    );

    Ok(Json(DialogResponse {
        state: transition.state,
        replies: transition.replies,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use solid_section_dialog::{DialogState, Incoming, Keyboard};

    async fn send(state: DialogState, text: &str) -> DialogResponse {
        let app = AppState::new(&Config::default()).unwrap();
        let request = DialogRequest {
            state,
            message: Incoming::text(text),
        };
        let Json(response) = step(State(app), Ok(Json(request))).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_full_conversation() {
        let r = send(DialogState::default(), "Tetrahedron").await;
        assert_eq!(r.state, DialogState::AwaitCoefficient);

        let r = send(r.state, "3").await;
        assert!(matches!(r.state, DialogState::AwaitPoint1 { .. }));

        let r = send(r.state, "0 0 0.5").await;
        let r = send(r.state, "0 3 0.5").await;
        let r = send(r.state, "3 0 1").await;

        assert_eq!(r.state, DialogState::SelectShape);
        assert_eq!(r.replies.len(), 2);
        assert!(r.replies[0].attachment.is_some());
        assert_eq!(r.replies[1].keyboard, Keyboard::SelectShape);
    }
}
