// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use serde::Deserialize;
use solid_section_dialog::{DialogState, Incoming};
use solid_section_geometry::SolidShape;

/// Body of `POST /api/v1/solids`.
#[derive(Debug, Clone, Deserialize)]
pub struct SolidRequest {
    pub solid: SolidShape,
}

/// Body of `POST /api/v1/section`.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionRequest {
    pub solid: SolidShape,
    /// Three plane points as typed by the user, `[X, Y, Z]` each.
    pub points: [[f64; 3]; 3],
}

/// Body of `POST /api/v1/dialog`.
#[derive(Debug, Clone, Deserialize)]
pub struct DialogRequest {
    /// Omitted on the first message of a conversation.
    #[serde(default)]
    pub state: DialogState,
    pub message: Incoming,
}
