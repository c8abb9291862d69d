//! Wizard steps and their routes.

use serde::{Deserialize, Serialize};

use outfitvote_core::constants::COUNTED_STEPS;
use outfitvote_core::errors::{OutfitResult, WorkflowError};

/// One screen of the wizard, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Upload,
    Outfits,
    Vote,
    Results,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Upload, Step::Outfits, Step::Vote, Step::Results];

    pub fn route(self) -> &'static str {
        match self {
            Step::Upload => "/upload",
            Step::Outfits => "/outfits",
            Step::Vote => "/vote",
            Step::Results => "/results",
        }
    }

    /// Resolve a route. `/` lands on the first step.
    pub fn from_route(route: &str) -> OutfitResult<Self> {
        let trimmed = route.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => return Ok(Step::Upload),
            other => other,
        };
        Step::ALL
            .into_iter()
            .find(|step| step.route() == normalized)
            .ok_or_else(|| WorkflowError::UnknownRoute(trimmed.to_string()).into())
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Upload => Some(Step::Outfits),
            Step::Outfits => Some(Step::Vote),
            Step::Vote => Some(Step::Results),
            Step::Results => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Upload => None,
            Step::Outfits => Some(Step::Upload),
            Step::Vote => Some(Step::Outfits),
            Step::Results => Some(Step::Vote),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Upload => "Upload your clothes",
            Step::Outfits => "Create outfits",
            Step::Vote => "Vote on outfits",
            Step::Results => "Results",
        }
    }

    /// "Step n/3" for the counted steps; results has no counter.
    pub fn label(self) -> Option<String> {
        match self {
            Step::Results => None,
            step => Some(format!("Step {}/{}", step.number(), COUNTED_STEPS)),
        }
    }

    fn number(self) -> usize {
        match self {
            Step::Upload => 1,
            Step::Outfits => 2,
            Step::Vote => 3,
            Step::Results => 4,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route())
    }
}
