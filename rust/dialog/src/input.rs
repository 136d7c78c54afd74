// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text input validation
//!
//! Incoming messages are classified against the current dialog step before
//! any transition runs, so the state machine only ever sees validated
//! values.

use crate::error::InputError;
use crate::reply::{BOX_BUTTON, CANCEL_BUTTON, NO_BUTTON, TETRAHEDRON_BUTTON, YES_BUTTON};
use crate::state::{DialogState, Incoming};
use nom::{
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

/// Command that restarts the conversation from any step
pub const START_COMMAND: &str = "/start";

/// Solid picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeChoice {
    Tetrahedron,
    Box,
}

/// Validated meaning of one incoming message
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    Start,
    Cancel,
    Shape(ShapeChoice),
    Number(f64),
    /// Point in user order (X, Y, Z)
    Point([f64; 3]),
    Yes,
    No,
    NonText,
    Invalid(InputError),
}

/// Parse coordinate: 3, -3, +3.25
/// Exponents and bare fractions like ".5" are not accepted, and digit runs
/// that overflow to infinity fail
fn coordinate(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| match s.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(()),
        },
    )(input)
}

/// Parse a positive number such as a solid dimension
pub fn parse_positive_number(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NotPositive(value))
    }
}

/// Parse three whitespace-separated coordinates, `X Y Z`
pub fn parse_point(text: &str) -> Result<[f64; 3], InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(InputError::CoordinateCount(tokens.len()));
    }

    let mut point = [0.0; 3];
    for (slot, token) in point.iter_mut().zip(tokens.iter().copied()) {
        let (_, value) = all_consuming(coordinate)(token)
            .map_err(|_| InputError::InvalidCoordinate(token.to_string()))?;
        *slot = value;
    }

    Ok(point)
}

/// Classify a message for the step the conversation is in
pub fn classify(state: &DialogState, incoming: &Incoming) -> InputKind {
    let text = match incoming {
        Incoming::NonText => return InputKind::NonText,
        Incoming::Text { text } => text.as_str(),
    };

    if text == START_COMMAND {
        return InputKind::Start;
    }

    match state {
        DialogState::SelectShape => match text {
            TETRAHEDRON_BUTTON => InputKind::Shape(ShapeChoice::Tetrahedron),
            BOX_BUTTON => InputKind::Shape(ShapeChoice::Box),
            other => InputKind::Invalid(InputError::UnexpectedAnswer(other.to_string())),
        },
        DialogState::AwaitCoefficient
        | DialogState::AwaitLength
        | DialogState::AwaitWidth { .. }
        | DialogState::AwaitHeight { .. } => {
            if text == CANCEL_BUTTON {
                InputKind::Cancel
            } else {
                parse_positive_number(text).map_or_else(InputKind::Invalid, InputKind::Number)
            }
        }
        DialogState::AwaitPoint1 { .. }
        | DialogState::AwaitPoint2 { .. }
        | DialogState::AwaitPoint3 { .. } => {
            if text == CANCEL_BUTTON {
                InputKind::Cancel
            } else {
                parse_point(text).map_or_else(InputKind::Invalid, InputKind::Point)
            }
        }
        DialogState::AwaitRetryConfirmation { .. } => match text {
            YES_BUTTON => InputKind::Yes,
            NO_BUTTON => InputKind::No,
            other => InputKind::Invalid(InputError::UnexpectedAnswer(other.to_string())),
        },
    }
}
