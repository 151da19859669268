//! Guided tutorial script
//!
//! A tutorial is a fixed list of steps. Each step waits for one event; the
//! matching event advances to the next step and finishing the last step ends
//! the tutorial. Events that do not match the current step are ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Events a front end reports to the tutorial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TutorialEvent {
    /// The user pressed "next"
    Next,
    /// The camera moved away from where it was when the step began
    Rotated,
    MarkPlaced,
    /// A fixed camera view was selected
    PresetUsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub text: &'static str,
    pub event: TutorialEvent,
}

pub static STEPS: [Step; 5] = [
    Step {
        text: "Welcome to 3D Tic-Tac-Toe! Click Next to start.",
        event: TutorialEvent::Next,
    },
    Step {
        text: "Rotate the board by dragging or using arrow keys.",
        event: TutorialEvent::Rotated,
    },
    Step {
        text: "Place a mark on any cube.",
        event: TutorialEvent::MarkPlaced,
    },
    Step {
        text: "Use the view buttons to change perspective.",
        event: TutorialEvent::PresetUsed,
    },
    Step {
        text: "Tutorial complete! Enjoy the game.",
        event: TutorialEvent::Next,
    },
];

#[derive(Debug, Clone, Default)]
pub struct Tutorial {
    current: usize,
    active: bool,
}

impl Tutorial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate from the first step
    pub fn start(&mut self) {
        self.current = 0;
        self.active = true;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_step(&self) -> Option<&'static Step> {
        if self.active {
            STEPS.get(self.current)
        } else {
            None
        }
    }

    pub fn current_text(&self) -> Option<&'static str> {
        self.current_step().map(|step| step.text)
    }

    /// Feed an event; returns `true` if it advanced the tutorial
    pub fn handle(&mut self, event: TutorialEvent) -> bool {
        match self.current_step() {
            Some(step) if step.event == event => {
                self.current += 1;
                if self.current >= STEPS.len() {
                    self.end();
                }
                debug!(step = self.current, active = self.active, "Tutorial advanced");
                true
            }
            _ => false,
        }
    }
}
