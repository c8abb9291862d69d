//! Workflow: the state carried across the four wizard steps.

use std::sync::Arc;

use outfitvote_closet::{Closet, UploadRequest};
use outfitvote_composer::{DayPlan, OutfitComposer, OutfitDraft};
use outfitvote_core::config::OutfitConfig;
use outfitvote_core::errors::{OutfitError, OutfitResult, ValidationError, WorkflowError};
use outfitvote_core::models::{
    ClothingId, ClothingItem, Day, ImageBlob, Notification, Outfit, ShareLink, VoteDirection,
};
use outfitvote_core::traits::Clipboard;
use outfitvote_observability::events;
use outfitvote_results::{summarize, ResultsSummary};
use outfitvote_voting::{VoteOutcome, VoteSession};

use crate::gate::{ActionGate, ActionKind, PendingAction};
use crate::notifications::Notifications;
use crate::step::Step;

pub const UPLOAD_SUCCESS: &str = "Clothing item added";
pub const SAVE_SUCCESS: &str = "Outfit created";
pub const SHARE_SUCCESS: &str = "Link copied to clipboard";

/// Wizard state: the closet, the composer, the running vote session and
/// the latest results, plus queued notifications.
///
/// Every failed operation queues an error notification and leaves the
/// state as it was.
pub struct Workflow {
    config: OutfitConfig,
    step: Step,
    closet: Closet,
    composer: OutfitComposer,
    session: Option<VoteSession>,
    results: Option<ResultsSummary>,
    notifications: Notifications,
    clipboard: Arc<dyn Clipboard>,
    upload_gate: ActionGate,
    save_gate: ActionGate,
}

impl Workflow {
    /// Start on the upload step. The closet and outfits are seeded with
    /// mock data when `config.seed_mock_data` is set.
    pub fn new(config: OutfitConfig, clipboard: Arc<dyn Clipboard>) -> Self {
        let max_bytes = config.upload.max_image_bytes;
        let prefix = config.composer.default_name_prefix.clone();
        let (closet, composer) = if config.seed_mock_data {
            (Closet::seeded(max_bytes), OutfitComposer::seeded(prefix))
        } else {
            (Closet::new(max_bytes), OutfitComposer::new(prefix))
        };
        Self::with_parts(config, closet, composer, clipboard)
    }

    /// Start on the upload step with an explicit closet and composer.
    pub fn with_parts(
        config: OutfitConfig,
        closet: Closet,
        composer: OutfitComposer,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            config,
            step: Step::Upload,
            closet,
            composer,
            session: None,
            results: None,
            notifications: Notifications::new(),
            clipboard,
            upload_gate: ActionGate::new(ActionKind::Upload),
            save_gate: ActionGate::new(ActionKind::SaveOutfit),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn config(&self) -> &OutfitConfig {
        &self.config
    }

    pub fn closet(&self) -> &Closet {
        &self.closet
    }

    pub fn composer(&self) -> &OutfitComposer {
        &self.composer
    }

    /// The running session. Present on the vote and results steps.
    pub fn session(&self) -> Option<&VoteSession> {
        self.session.as_ref()
    }

    /// The summary computed on entering the results step.
    pub fn results(&self) -> Option<&ResultsSummary> {
        self.results.as_ref()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    pub fn week_plan(&self) -> Vec<DayPlan> {
        self.composer.week_plan()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_gate.is_in_flight()
    }

    pub fn is_saving(&self) -> bool {
        self.save_gate.is_in_flight()
    }

    // ── Upload step ─────────────────────────────────────────────────────

    /// Validate an upload and start its simulated latency.
    ///
    /// Invalid input is rejected before the timer starts. Fails with
    /// `ActionInFlight` while a previous upload is pending.
    pub fn request_upload(
        &mut self,
        name: &str,
        image: Option<ImageBlob>,
    ) -> OutfitResult<PendingAction<UploadRequest>> {
        let result = self.try_request_upload(name, image);
        self.report("upload", result)
    }

    fn try_request_upload(
        &self,
        name: &str,
        image: Option<ImageBlob>,
    ) -> OutfitResult<PendingAction<UploadRequest>> {
        self.ensure_step(Step::Upload, "upload")?;
        ensure_idle(&self.upload_gate)?;
        let request = self.closet.validate(name, image)?;
        let delay = self.config.upload.delay();
        self.upload_gate.schedule(delay, request)
    }

    /// Wait for a pending upload and add the item to the closet.
    pub async fn finish_upload(
        &mut self,
        pending: PendingAction<UploadRequest>,
    ) -> OutfitResult<ClothingItem> {
        let result = pending.wait().await;
        let request = self.report("upload", result)?;
        let item = self.closet.commit(request);
        events::clothing_added(item.id.as_str(), &item.name, self.closet.len());
        self.notifications.success(UPLOAD_SUCCESS);
        Ok(item)
    }

    /// Request and finish an upload in one call.
    pub async fn upload(
        &mut self,
        name: &str,
        image: Option<ImageBlob>,
    ) -> OutfitResult<ClothingItem> {
        let pending = self.request_upload(name, image)?;
        self.finish_upload(pending).await
    }

    // ── Outfits step ────────────────────────────────────────────────────

    /// Open a draft for `day`, replacing any open draft.
    pub fn start_draft(&mut self, day: Day) -> OutfitResult<&OutfitDraft> {
        let result = self.ensure_step(Step::Outfits, "start_draft");
        self.report("start_draft", result)?;
        Ok(self.composer.start_draft(day))
    }

    /// Toggle a closet item in the open draft. Returns whether it is now
    /// selected.
    pub fn toggle(&mut self, id: &ClothingId) -> OutfitResult<bool> {
        let result = self.try_toggle(id);
        self.report("toggle", result)
    }

    fn try_toggle(&mut self, id: &ClothingId) -> OutfitResult<bool> {
        self.ensure_step(Step::Outfits, "toggle")?;
        if !self.closet.contains(id) {
            return Err(ValidationError::UnknownClothingItem {
                id: id.to_string(),
            }
            .into());
        }
        self.composer.toggle(id)
    }

    pub fn rename(&mut self, name: &str) -> OutfitResult<()> {
        let result = self
            .ensure_step(Step::Outfits, "rename")
            .and_then(|()| self.composer.rename(name));
        self.report("rename", result)
    }

    pub fn cancel_draft(&mut self) -> Option<OutfitDraft> {
        self.composer.cancel_draft()
    }

    /// Validate the open draft and start the save latency.
    ///
    /// The outfit is built from the draft as it is now; edits made while
    /// the save is pending do not change it.
    pub fn request_save(&mut self) -> OutfitResult<PendingAction<Outfit>> {
        let result = self.try_request_save();
        self.report("save_outfit", result)
    }

    fn try_request_save(&self) -> OutfitResult<PendingAction<Outfit>> {
        self.ensure_step(Step::Outfits, "save_outfit")?;
        ensure_idle(&self.save_gate)?;
        let outfit = self.composer.prepare_save(&self.closet)?;
        let delay = self.config.composer.save_delay();
        self.save_gate.schedule(delay, outfit)
    }

    /// Wait for a pending save, append the outfit and close the draft.
    pub async fn finish_save(&mut self, pending: PendingAction<Outfit>) -> OutfitResult<Outfit> {
        let result = pending.wait().await;
        let outfit = self.report("save_outfit", result)?;
        let outfit = self.composer.commit(outfit);
        events::outfit_created(outfit.id.as_str(), outfit.day.label(), self.composer.len());
        self.notifications.success(SAVE_SUCCESS);
        Ok(outfit)
    }

    /// Request and finish a save in one call.
    pub async fn save_outfit(&mut self) -> OutfitResult<Outfit> {
        let pending = self.request_save()?;
        self.finish_save(pending).await
    }

    // ── Vote step ───────────────────────────────────────────────────────

    pub fn cast_vote(&mut self, direction: VoteDirection) -> OutfitResult<VoteOutcome> {
        let result = self.try_cast_vote(direction);
        self.report("cast_vote", result)
    }

    fn try_cast_vote(&mut self, direction: VoteDirection) -> OutfitResult<VoteOutcome> {
        self.ensure_step(Step::Vote, "cast_vote")?;
        let session = self.session.as_mut().ok_or(WorkflowError::NoActiveSession)?;
        let outcome = session.cast_vote(direction)?;
        events::vote_cast(
            outcome.outfit_id.as_str(),
            &direction.to_string(),
            outcome.votes,
        );
        if outcome.state.is_complete() {
            events::session_completed(session.len(), session.tally());
        }
        Ok(outcome)
    }

    /// Copy a share link to the clipboard.
    ///
    /// A completed session shares its own link; while voting is still
    /// under way a fresh link is generated.
    pub fn share(&mut self) -> OutfitResult<ShareLink> {
        let result = self.try_share();
        let link = self.report("share", result)?;
        events::link_shared(&link.url);
        self.notifications.success(SHARE_SUCCESS);
        Ok(link)
    }

    fn try_share(&self) -> OutfitResult<ShareLink> {
        self.ensure_step(Step::Vote, "share")?;
        let session = self.session.as_ref().ok_or(WorkflowError::NoActiveSession)?;
        let link = match session.share_link() {
            Some(link) => link.clone(),
            None => ShareLink::generate(
                &self.config.voting.share_base_url,
                self.config.voting.share_token_len,
            ),
        };
        self.clipboard.write_text(&link.url)?;
        Ok(link)
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Move to the next step if its guard allows it.
    pub fn go_next(&mut self) -> OutfitResult<Step> {
        let result = self.try_go_next();
        self.report("go_next", result)
    }

    fn try_go_next(&mut self) -> OutfitResult<Step> {
        let from = self.step;
        let to = from.next().ok_or_else(|| WorkflowError::InvalidTransition {
            from: from.to_string(),
            to: "(none)".to_string(),
        })?;

        match to {
            Step::Outfits => {
                if self.closet.is_empty() {
                    return Err(ValidationError::EmptyCloset.into());
                }
            }
            Step::Vote => {
                // A pending save would land in a composer the session has emptied.
                ensure_idle(&self.save_gate)?;
                if self.composer.is_empty() {
                    return Err(ValidationError::NoOutfits.into());
                }
                let outfits = self.composer.take_outfits();
                self.session = Some(VoteSession::new(outfits, self.config.voting.clone())?);
            }
            Step::Results => {
                let session = self.session.as_ref().ok_or(WorkflowError::NoActiveSession)?;
                if session.votes_cast() == 0 {
                    return Err(ValidationError::NoVotesCast.into());
                }
                self.results = Some(summarize(session.outfits()));
            }
            Step::Upload => {}
        }

        self.enter(to);
        Ok(to)
    }

    /// Move to the previous step. Leaving the vote step hands the tallied
    /// outfits back to the composer.
    pub fn go_back(&mut self) -> OutfitResult<Step> {
        let result = self.try_go_back();
        self.report("go_back", result)
    }

    fn try_go_back(&mut self) -> OutfitResult<Step> {
        let from = self.step;
        let to = from.previous().ok_or_else(|| WorkflowError::InvalidTransition {
            from: from.to_string(),
            to: "(none)".to_string(),
        })?;

        match from {
            Step::Vote => {
                if let Some(session) = self.session.take() {
                    self.composer.restore_outfits(session.into_outfits());
                }
            }
            Step::Results => self.results = None,
            Step::Upload | Step::Outfits => {}
        }

        self.enter(to);
        Ok(to)
    }

    /// Navigate by route. Only the adjacent steps are reachable; staying
    /// on the current route is a no-op.
    pub fn navigate(&mut self, route: &str) -> OutfitResult<Step> {
        let target = Step::from_route(route);
        let target = self.report("navigate", target)?;
        if target == self.step {
            Ok(target)
        } else if Some(target) == self.step.next() {
            self.go_next()
        } else if Some(target) == self.step.previous() {
            self.go_back()
        } else {
            let result = Err(WorkflowError::InvalidTransition {
                from: self.step.to_string(),
                to: target.to_string(),
            }
            .into());
            self.report("navigate", result)
        }
    }

    fn enter(&mut self, to: Step) {
        events::step_changed(self.step.route(), to.route());
        self.step = to;
    }

    // ── Helpers ─────────────────────────────────────────────────────────

    fn ensure_step(&self, expected: Step, operation: &str) -> OutfitResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WorkflowError::NotOnStep {
                operation: operation.to_string(),
                expected: expected.to_string(),
                actual: self.step.to_string(),
            }
            .into())
        }
    }

    /// Queue an error notification for a failed operation.
    fn report<T>(&mut self, operation: &str, result: OutfitResult<T>) -> OutfitResult<T> {
        if let Err(err) = &result {
            let message = user_message(err);
            events::input_rejected(operation, &message);
            self.notifications.error(message);
        }
        result
    }
}

impl std::fmt::Debug for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workflow")
            .field("step", &self.step)
            .field("closet", &self.closet.len())
            .field("outfits", &self.composer.len())
            .field("session", &self.session.as_ref().map(|s| s.state()))
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

fn ensure_idle(gate: &ActionGate) -> OutfitResult<()> {
    if gate.is_in_flight() {
        events::action_rejected(gate.kind().as_str());
        return Err(WorkflowError::ActionInFlight {
            action: gate.kind().to_string(),
        }
        .into());
    }
    Ok(())
}

/// The notification text for an error, without the category prefix.
fn user_message(err: &OutfitError) -> String {
    match err {
        OutfitError::Validation(e) => e.to_string(),
        OutfitError::Workflow(e) => e.to_string(),
        other => other.to_string(),
    }
}
