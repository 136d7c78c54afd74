// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Why a text message was not accepted as input for the current step
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is not a finite number greater than 0")]
    NotPositive(f64),

    #[error("expected 3 coordinates, got {0}")]
    CoordinateCount(usize),

    #[error("'{0}' is not a whole or decimal number")]
    InvalidCoordinate(String),

    #[error("unexpected answer '{0}'")]
    UnexpectedAnswer(String),
}
