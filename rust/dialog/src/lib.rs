// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solid-Section Dialog
//!
//! Step-by-step conversation for picking a solid, entering its dimensions
//! and three points of a cutting plane. Transport-agnostic: callers feed
//! [`Incoming`] messages with the current [`DialogState`] and forward the
//! returned [`Reply`] values to whatever chat front-end they use.

pub mod error;
pub mod input;
pub mod machine;
pub mod reply;
pub mod state;

pub use error::InputError;
pub use input::{classify, parse_point, parse_positive_number, InputKind, ShapeChoice};
pub use machine::{Dialog, Transition};
pub use reply::{Attachment, Keyboard, Reply, SectionOutcome};
pub use state::{DialogState, Incoming};
