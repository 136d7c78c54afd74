// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversation state and incoming messages
//!
//! The state is a plain value owned by the caller. It carries every
//! parameter collected so far, so a conversation can be resumed from a
//! serialized copy alone.

use serde::{Deserialize, Serialize};
use solid_section_geometry::SolidShape;

/// Step the conversation is waiting on
///
/// Stored points are in engine order (Y, X, Z).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    SelectShape,
    AwaitCoefficient,
    AwaitLength,
    AwaitWidth {
        length: f64,
    },
    AwaitHeight {
        length: f64,
        width: f64,
    },
    #[serde(rename = "await_point_1")]
    AwaitPoint1 {
        solid: SolidShape,
    },
    #[serde(rename = "await_point_2")]
    AwaitPoint2 {
        solid: SolidShape,
        p1: [f64; 3],
    },
    #[serde(rename = "await_point_3")]
    AwaitPoint3 {
        solid: SolidShape,
        p1: [f64; 3],
        p2: [f64; 3],
    },
    AwaitRetryConfirmation {
        solid: SolidShape,
    },
}

/// Message received from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Incoming {
    Text { text: String },
    /// Photo, sticker, voice or any other non-text content
    NonText,
}

impl Incoming {
    pub fn text(text: impl Into<String>) -> Self {
        Incoming::Text { text: text.into() }
    }
}
