// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outgoing replies
//!
//! A reply is text plus a hint about which buttons the front-end should
//! offer. Solids and sections travel as structured attachments; drawing
//! them is left to the front-end.

use serde::{Deserialize, Serialize};
use solid_section_geometry::{to_arrays, AxisAlignment, Section, SectionError, SolidShape};

pub const TETRAHEDRON_BUTTON: &str = "Tetrahedron";
pub const BOX_BUTTON: &str = "Box";
pub const CANCEL_BUTTON: &str = "Cancel";
pub const YES_BUTTON: &str = "Yes";
pub const NO_BUTTON: &str = "No";

/// Button set to show with a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyboard {
    /// Main menu: pick a solid
    SelectShape,
    Cancel,
    YesNo,
    /// Leave whatever the front-end shows
    None,
}

impl Keyboard {
    /// Button labels, row by row
    pub fn buttons(&self) -> &'static [&'static str] {
        match self {
            Keyboard::SelectShape => &[TETRAHEDRON_BUTTON, BOX_BUTTON],
            Keyboard::Cancel => &[CANCEL_BUTTON],
            Keyboard::YesNo => &[NO_BUTTON, YES_BUTTON],
            Keyboard::None => &[],
        }
    }
}

/// Result of a section request as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    Ok {
        /// Section points in the solid's frame, ready to plot with it
        points: Vec<[f64; 3]>,
        alignment: AxisAlignment,
    },
    Failed {
        reason: String,
        message: String,
    },
}

impl SectionOutcome {
    pub fn from_result(result: &Result<Section, SectionError>) -> Self {
        match result {
            Ok(section) => SectionOutcome::Ok {
                points: to_arrays(section.points()),
                alignment: section.alignment(),
            },
            Err(err) => SectionOutcome::Failed {
                reason: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Structured payload carried by a reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Attachment {
    Solid {
        solid: SolidShape,
    },
    Section {
        solid: SolidShape,
        outcome: SectionOutcome,
    },
}

/// One message sent back to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl Reply {
    pub fn new(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard,
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}
