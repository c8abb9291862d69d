//! OutfitComposer: the outfit collection and the draft being edited.

use outfitvote_closet::Closet;
use outfitvote_core::config::defaults::DEFAULT_OUTFIT_NAME_PREFIX;
use outfitvote_core::errors::{OutfitResult, WorkflowError};
use outfitvote_core::models::{ClothingId, Day, Outfit};
use tracing::debug;

use crate::create::{create_outfit, default_outfit_name};
use crate::draft::OutfitDraft;
use crate::seed;
use crate::week_plan::{week_plan, DayPlan};

/// Owns the composed outfits and at most one open draft.
#[derive(Debug, Clone)]
pub struct OutfitComposer {
    outfits: Vec<Outfit>,
    draft: Option<OutfitDraft>,
    name_prefix: String,
}

impl OutfitComposer {
    pub fn new(name_prefix: impl Into<String>) -> Self {
        Self::with_outfits(Vec::new(), name_prefix)
    }

    /// A composer pre-filled with the mock outfits.
    pub fn seeded(name_prefix: impl Into<String>) -> Self {
        let name_prefix = name_prefix.into();
        Self::with_outfits(seed::mock_outfits(&name_prefix), name_prefix)
    }

    pub fn with_outfits(outfits: Vec<Outfit>, name_prefix: impl Into<String>) -> Self {
        Self {
            outfits,
            draft: None,
            name_prefix: name_prefix.into(),
        }
    }

    // ── Drafts ──────────────────────────────────────────────────────────

    /// Open a draft for `day` with the default name and no selection.
    /// Replaces any draft already open.
    pub fn start_draft(&mut self, day: Day) -> &OutfitDraft {
        let name = default_outfit_name(&self.name_prefix, day);
        self.draft.insert(OutfitDraft::new(day, name))
    }

    pub fn draft(&self) -> Option<&OutfitDraft> {
        self.draft.as_ref()
    }

    /// Toggle an item in the open draft. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &ClothingId) -> OutfitResult<bool> {
        let draft = self.draft.as_mut().ok_or(WorkflowError::NoOpenDraft)?;
        Ok(draft.toggle(id))
    }

    pub fn rename(&mut self, name: &str) -> OutfitResult<()> {
        let draft = self.draft.as_mut().ok_or(WorkflowError::NoOpenDraft)?;
        draft.name = name.to_string();
        Ok(())
    }

    /// Close the draft without saving.
    pub fn cancel_draft(&mut self) -> Option<OutfitDraft> {
        self.draft.take()
    }

    /// Build the outfit the open draft would produce, without saving it.
    pub fn prepare_save(&self, closet: &Closet) -> OutfitResult<Outfit> {
        let draft = self.draft.as_ref().ok_or(WorkflowError::NoOpenDraft)?;
        create_outfit(
            closet,
            draft.day,
            &draft.name,
            draft.selection(),
            &self.name_prefix,
        )
    }

    /// Append a prepared outfit and close the draft.
    pub fn commit(&mut self, outfit: Outfit) -> Outfit {
        self.draft = None;
        self.outfits.push(outfit.clone());
        debug!(
            outfit_id = %outfit.id,
            day = %outfit.day,
            "outfit committed"
        );
        outfit
    }

    /// Save the open draft. On failure the draft stays open and the
    /// collection is unchanged.
    pub fn save_draft(&mut self, closet: &Closet) -> OutfitResult<Outfit> {
        let outfit = self.prepare_save(closet)?;
        Ok(self.commit(outfit))
    }

    // ── Direct creation ─────────────────────────────────────────────────

    /// Create and append an outfit from an explicit selection.
    pub fn create_outfit(
        &mut self,
        closet: &Closet,
        day: Day,
        name: &str,
        selected: &[ClothingId],
    ) -> OutfitResult<Outfit> {
        let outfit = create_outfit(closet, day, name, selected, &self.name_prefix)?;
        self.outfits.push(outfit.clone());
        Ok(outfit)
    }

    // ── Collection ──────────────────────────────────────────────────────

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    /// Hand the outfits to the next step.
    pub fn take_outfits(&mut self) -> Vec<Outfit> {
        std::mem::take(&mut self.outfits)
    }

    /// Receive the outfits back (with their tallies) from a later step.
    pub fn restore_outfits(&mut self, outfits: Vec<Outfit>) {
        self.outfits = outfits;
    }

    /// The current outfit for `day`: the most recently created one.
    pub fn current_for(&self, day: Day) -> Option<&Outfit> {
        self.outfits.iter().rev().find(|o| o.day == day)
    }

    pub fn week_plan(&self) -> Vec<DayPlan> {
        week_plan(&self.outfits)
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }
}

impl Default for OutfitComposer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTFIT_NAME_PREFIX)
    }
}
