//! Onboarding prompt and guided tour.
//!
//! First-time users (no dismissal flag) are asked whether to take the tour.
//! Starting or skipping it sets the flag, so the prompt is shown once.

use serde::Serialize;

use crate::settings::Settings;

/// Side of the target element a step's bubble attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TourStep {
    pub id: &'static str,
    pub text: &'static str,
    /// CSS selector of the highlighted element on the host page.
    pub target: &'static str,
    pub placement: Placement,
}

pub const TOUR_STEPS: &[TourStep] = &[
    TourStep {
        id: "step-code-editor",
        text: "This is the Code Editor where you can write your HTML code.",
        target: ".code-editor",
        placement: Placement::Right,
    },
    TourStep {
        id: "step-preview",
        text: "This is the Preview section where you can see live changes.",
        target: ".preview",
        placement: Placement::Left,
    },
    TourStep {
        id: "step-nav-editor",
        text: "Click here to switch to the Editor tab.",
        target: ".tab-editor",
        placement: Placement::Bottom,
    },
    TourStep {
        id: "step-nav-components",
        text: "This is the Components tab where you can view various UI components.",
        target: ".tab-components",
        placement: Placement::Bottom,
    },
    TourStep {
        id: "step-nav-colors",
        text: "Here you can see and select different color palettes.",
        target: ".tab-colors",
        placement: Placement::Bottom,
    },
    TourStep {
        id: "step-copy-button",
        text: "This button copies the HTML code to your clipboard.",
        target: ".btn-copy",
        placement: Placement::Bottom,
    },
    TourStep {
        id: "step-save-button",
        text: "Click here to save your code.",
        target: ".btn-save",
        placement: Placement::Bottom,
    },
    TourStep {
        id: "step-download-button",
        text: "Download your code as an HTML file.",
        target: ".btn-download",
        placement: Placement::Bottom,
    },
];

/// Whether to show the onboarding prompt.
pub fn should_prompt(settings: &Settings) -> bool {
    !settings.tour_dismissed
}

/// Dismiss the prompt without touring.
pub fn skip(settings: &mut Settings) {
    settings.tour_dismissed = true;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "step", rename_all = "lowercase")]
pub enum TourStatus {
    Active(usize),
    Completed,
    Cancelled,
}

/// Walks [`TOUR_STEPS`].
#[derive(Debug, Clone)]
pub struct Tour {
    steps: &'static [TourStep],
    status: TourStatus,
}

impl Tour {
    /// Begin at the first step. Starting counts as dismissing the prompt.
    pub fn start(settings: &mut Settings) -> Self {
        settings.tour_dismissed = true;
        Self {
            steps: TOUR_STEPS,
            status: TourStatus::Active(0),
        }
    }

    pub fn status(&self) -> TourStatus {
        self.status
    }

    pub fn current(&self) -> Option<&TourStep> {
        match self.status {
            TourStatus::Active(i) => self.steps.get(i),
            _ => None,
        }
    }

    /// Advance; moving past the last step completes the tour.
    pub fn next(&mut self) -> TourStatus {
        if let TourStatus::Active(i) = self.status {
            self.status = if i + 1 < self.steps.len() {
                TourStatus::Active(i + 1)
            } else {
                TourStatus::Completed
            };
        }
        self.status
    }

    pub fn back(&mut self) -> TourStatus {
        if let TourStatus::Active(i) = self.status {
            self.status = TourStatus::Active(i.saturating_sub(1));
        }
        self.status
    }

    pub fn complete(&mut self) {
        self.status = TourStatus::Completed;
    }

    pub fn cancel(&mut self) {
        if let TourStatus::Active(_) = self.status {
            self.status = TourStatus::Cancelled;
        }
    }
}
