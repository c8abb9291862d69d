//! Per-day view over the outfit collection.

use outfitvote_core::models::{Day, Outfit};
use serde::Serialize;

/// What is planned for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day: Day,
    /// The most recently created outfit for this day.
    pub current: Option<Outfit>,
    /// How many outfits are tagged with this day.
    pub outfit_count: usize,
}

impl DayPlan {
    pub fn has_outfit(&self) -> bool {
        self.current.is_some()
    }
}

/// One entry per day, Monday first.
pub fn week_plan(outfits: &[Outfit]) -> Vec<DayPlan> {
    Day::ALL
        .into_iter()
        .map(|day| {
            let mut tagged = outfits.iter().filter(|o| o.day == day);
            let outfit_count = tagged.clone().count();
            DayPlan {
                day,
                current: tagged.next_back().cloned(),
                outfit_count,
            }
        })
        .collect()
}
