//! Stage routing and decision types.

use caduceus_common::Classification;
use serde::{Deserialize, Serialize};

/// A named step in the fixed request-handling sequence.
///
/// The stage graph is a linear chain traversed strictly forward:
/// Intake → Emergency → Specialist → Done. Branching is expressed only
/// through which agent executes at a stage, never through alternate edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Intake,
    Emergency,
    Specialist,
    Done,
}

impl Stage {
    /// The fixed transition table. `Done` is terminal.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Intake => Some(Stage::Emergency),
            Stage::Emergency => Some(Stage::Specialist),
            Stage::Specialist => Some(Stage::Done),
            Stage::Done => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Done
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Intake => "intake",
            Stage::Emergency => "emergency",
            Stage::Specialist => "specialist",
            Stage::Done => "done",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide which processing stage handles a classification.
///
/// High urgency must pass emergency screening; everything else goes
/// straight to specialist routing. Pure and total: consults nothing
/// beyond the classification itself.
pub fn route(classification: &Classification) -> Stage {
    if classification.requires_screening() {
        Stage::Emergency
    } else {
        Stage::Specialist
    }
}

/// The result of a routing decision, with human-readable reasoning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDecision {
    /// The stage that handles the case
    pub stage: Stage,

    /// Reasoning for the decision
    pub reasoning: String,
}

impl RouteDecision {
    pub fn decide(classification: &Classification) -> Self {
        let stage = route(classification);
        let reasoning = match stage {
            Stage::Emergency => format!(
                "Red-flag indicators present ({}); emergency screening required",
                classification.red_flags.join(", ")
            ),
            Stage::Specialist => format!(
                "No emergency indicators; routing to specialist at {} urgency",
                classification.urgency
            ),
            Stage::Intake | Stage::Done => unreachable!("route never yields {stage}"),
        };

        Self { stage, reasoning }
    }
}
