// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dialog state machine
//!
//! `Dialog::step` maps (state, message) to the next state and the replies to
//! send. It holds no per-conversation data; everything collected so far lives
//! in the [`DialogState`] value passed in.


use crate::input::{classify, InputKind, ShapeChoice};
use crate::reply::{Attachment, Keyboard, Reply, SectionOutcome};
use crate::state::{DialogState, Incoming};
use solid_section_geometry::{collinear, from_user_order, to_user_order, Point3, SectionEngine, SolidShape};
use tracing::{debug, warn};

const MAIN_PROMPT: &str = "Choose a solid to build a section for.";
const TEXT_ONLY: &str = "Only text messages are accepted. Try again.";
const INVALID_NUMBER: &str = "Enter a whole or decimal number greater than 0. Try again.";
const INVALID_POINT: &str = "Enter exactly 3 whole or decimal numbers separated by spaces. Try again.";
const DUPLICATE_POINT: &str = "These coordinates match a previous point. Try again.";
const ANSWER_YES_NO: &str = "Answer Yes / No.";
const POINT_EXAMPLE: &str = "Coordinates look like this: X Y Z.";

/// Next state plus the replies produced by one message
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: DialogState,
    pub replies: Vec<Reply>,
}

impl Transition {
    fn to(state: DialogState, replies: Vec<Reply>) -> Self {
        Self { state, replies }
    }

    fn stay(state: DialogState, reply: Reply) -> Self {
        Self {
            state,
            replies: vec![reply],
        }
    }
}

fn main_menu() -> Transition {
    Transition::to(
        DialogState::SelectShape,
        vec![Reply::new(MAIN_PROMPT, Keyboard::SelectShape)],
    )
}

fn solid_title(solid: &SolidShape) -> &'static str {
    match solid {
        SolidShape::Tetrahedron { .. } => "Tetrahedron",
        SolidShape::Cuboid { .. } => "Box",
    }
}

fn point_prompt(ordinal: &str, solid: &SolidShape) -> String {
    format!(
        "Enter the coordinates of the {} point for the {} section, separated by spaces.\n{}",
        ordinal,
        solid.name(),
        POINT_EXAMPLE
    )
}

#[inline]
fn to_point(p: &[f64; 3]) -> Point3<f64> {
    Point3::new(p[0], p[1], p[2])
}

/// Render an engine-order point the way the user typed it
fn format_point(point: &[f64; 3]) -> String {
    let [x, y, z] = to_user_order(&to_point(point));
    format!("({}, {}, {})", x, y, z)
}

/// Conversation driver for building solids and their sections
#[derive(Debug, Clone, Copy, Default)]
pub struct Dialog {
    engine: SectionEngine,
}

impl Dialog {
    pub fn new(engine: SectionEngine) -> Self {
        Self { engine }
    }

    /// Handle one incoming message
    pub fn step(&self, state: DialogState, incoming: &Incoming) -> Transition {
        let input = classify(&state, incoming);
        debug!(?state, ?input, "dialog input");

        if input == InputKind::Start {
            return main_menu();
        }

        match state {
            DialogState::SelectShape => self.select_shape(input),
            DialogState::AwaitRetryConfirmation { solid } => self.confirm_retry(solid, input),
            _ => match input {
                InputKind::NonText => Transition::stay(state, Reply::new(TEXT_ONLY, Keyboard::Cancel)),
                InputKind::Cancel => main_menu(),
                InputKind::Number(value) => self.accept_number(state, value),
                InputKind::Point(point) => self.accept_point(state, point),
                _ => Transition::stay(state, invalid_input_reply(&state)),
            },
        }
    }

    fn select_shape(&self, input: InputKind) -> Transition {
        match input {
            InputKind::Shape(ShapeChoice::Tetrahedron) => Transition::stay(
                DialogState::AwaitCoefficient,
                Reply::new(
                    "Enter the coefficient for building the tetrahedron.",
                    Keyboard::Cancel,
                ),
            ),
            InputKind::Shape(ShapeChoice::Box) => Transition::stay(
                DialogState::AwaitLength,
                Reply::new("Enter the length of the box.", Keyboard::Cancel),
            ),
            // Anything else on the main menu is ignored
            _ => Transition::to(DialogState::SelectShape, Vec::new()),
        }
    }

    fn accept_number(&self, state: DialogState, value: f64) -> Transition {
        match state {
            DialogState::AwaitCoefficient => {
                self.solid_ready(state, SolidShape::Tetrahedron { coefficient: value })
            }
            DialogState::AwaitLength => Transition::stay(
                DialogState::AwaitWidth { length: value },
                Reply::new("Enter the width of the box.", Keyboard::Cancel),
            ),
            DialogState::AwaitWidth { length } => Transition::stay(
                DialogState::AwaitHeight {
                    length,
                    width: value,
                },
                Reply::new("Enter the height of the box.", Keyboard::Cancel),
            ),
            DialogState::AwaitHeight { length, width } => self.solid_ready(
                state,
                SolidShape::Cuboid {
                    length,
                    width,
                    height: value,
                },
            ),
            other => Transition::stay(other, invalid_input_reply(&other)),
        }
    }

    fn solid_ready(&self, state: DialogState, solid: SolidShape) -> Transition {
        if let Err(err) = solid.build() {
            warn!(%err, "rejected solid parameters");
            return Transition::stay(state, Reply::new(INVALID_NUMBER, Keyboard::None));
        }

        let description = match solid {
            SolidShape::Tetrahedron { coefficient } => {
                format!("Tetrahedron with coefficient {} is ready.", coefficient)
            }
            SolidShape::Cuboid {
                length,
                width,
                height,
            } => format!(
                "Box with length {}, width {} and height {} is ready.",
                length, width, height
            ),
        };

        let reply = Reply::new(
            format!("{}\n{}", description, point_prompt("first", &solid)),
            Keyboard::Cancel,
        )
        .with_attachment(Attachment::Solid { solid });

        Transition::stay(DialogState::AwaitPoint1 { solid }, reply)
    }

    fn accept_point(&self, state: DialogState, user_point: [f64; 3]) -> Transition {
        let internal = from_user_order(user_point);
        let point = [internal.x, internal.y, internal.z];

        match state {
            DialogState::AwaitPoint1 { solid } => Transition::stay(
                DialogState::AwaitPoint2 { solid, p1: point },
                Reply::new(point_prompt("second", &solid), Keyboard::None),
            ),
            DialogState::AwaitPoint2 { solid, p1 } => {
                if point == p1 {
                    return Transition::stay(state, Reply::new(DUPLICATE_POINT, Keyboard::Cancel));
                }
                Transition::stay(
                    DialogState::AwaitPoint3 {
                        solid,
                        p1,
                        p2: point,
                    },
                    Reply::new(point_prompt("third", &solid), Keyboard::None),
                )
            }
            DialogState::AwaitPoint3 { solid, p1, p2 } => {
                if point == p1 || point == p2 {
                    return Transition::stay(state, Reply::new(DUPLICATE_POINT, Keyboard::Cancel));
                }
                self.finish_section(solid, p1, p2, point)
            }
            other => Transition::stay(other, invalid_input_reply(&other)),
        }
    }

    fn finish_section(
        &self,
        solid: SolidShape,
        p1: [f64; 3],
        p2: [f64; 3],
        p3: [f64; 3],
    ) -> Transition {
        let (a, b, c) = (to_point(&p1), to_point(&p2), to_point(&p3));

        if collinear(&a, &b, &c) {
            let text = format!(
                "Points\nA {}\nB {}\nC {}\nlie on one line, so no section can be built. \
                 Do you want to enter the points again?",
                format_point(&p1),
                format_point(&p2),
                format_point(&p3)
            );
            return Transition::stay(
                DialogState::AwaitRetryConfirmation { solid },
                Reply::new(text, Keyboard::YesNo),
            );
        }

        let polyhedron = match solid.build() {
            Ok(polyhedron) => polyhedron,
            Err(err) => {
                warn!(%err, "stored solid no longer builds");
                return main_menu();
            }
        };
        let result = self.engine.compute(&polyhedron, &a, &b, &c);

        let caption = match &result {
            Ok(_) => format!("{} with the given section is ready.", solid_title(&solid)),
            Err(err) => err.to_string(),
        };
        debug!(solid = solid.name(), ok = result.is_ok(), "section computed");

        let section_reply = Reply::new(caption, Keyboard::None).with_attachment(Attachment::Section {
            solid,
            outcome: SectionOutcome::from_result(&result),
        });

        let mut transition = main_menu();
        transition.replies.insert(0, section_reply);
        transition
    }

    fn confirm_retry(&self, solid: SolidShape, input: InputKind) -> Transition {
        let state = DialogState::AwaitRetryConfirmation { solid };

        match input {
            InputKind::NonText => Transition::stay(state, Reply::new(TEXT_ONLY, Keyboard::YesNo)),
            InputKind::Yes => Transition::stay(
                DialogState::AwaitPoint1 { solid },
                Reply::new(point_prompt("first", &solid), Keyboard::Cancel),
            ),
            InputKind::No => main_menu(),
            _ => Transition::stay(state, Reply::new(ANSWER_YES_NO, Keyboard::YesNo)),
        }
    }
}

/// Format error for the value the state is waiting on
fn invalid_input_reply(state: &DialogState) -> Reply {
    match state {
        DialogState::AwaitPoint1 { .. }
        | DialogState::AwaitPoint2 { .. }
        | DialogState::AwaitPoint3 { .. } => Reply::new(INVALID_POINT, Keyboard::Cancel),
        _ => Reply::new(INVALID_NUMBER, Keyboard::None),
    }
}
