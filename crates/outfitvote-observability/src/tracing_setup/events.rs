//! Structured log events for workflow operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a clothing item being added to the closet.
pub fn clothing_added(item_id: &str, name: &str, closet_size: usize) {
    tracing::info!(
        event = "clothing_added",
        item_id = %item_id,
        name = %name,
        closet_size = closet_size,
        "clothing item added"
    );
}

/// Log an outfit being saved.
pub fn outfit_created(outfit_id: &str, day: &str, outfit_count: usize) {
    tracing::info!(
        event = "outfit_created",
        outfit_id = %outfit_id,
        day = %day,
        outfit_count = outfit_count,
        "outfit created"
    );
}

/// Log an accepted vote.
pub fn vote_cast(outfit_id: &str, direction: &str, votes: i64) {
    tracing::info!(
        event = "vote_cast",
        outfit_id = %outfit_id,
        direction = %direction,
        votes = votes,
        "vote cast"
    );
}

/// Log a vote session reaching its terminal state.
pub fn session_completed(outfits: usize, tally: i128) {
    tracing::info!(
        event = "session_completed",
        outfits = outfits,
        tally = %tally,
        "vote session completed"
    );
}

/// Log a share link written to the clipboard.
pub fn link_shared(url: &str) {
    tracing::info!(event = "link_shared", url = %url, "share link copied");
}

/// Log a wizard navigation.
pub fn step_changed(from: &str, to: &str) {
    tracing::debug!(
        event = "step_changed",
        from = %from,
        to = %to,
        "step changed"
    );
}

/// Log an operation rejected because of user input.
pub fn input_rejected(operation: &str, reason: &str) {
    tracing::warn!(
        event = "input_rejected",
        operation = %operation,
        reason = %reason,
        "input rejected"
    );
}

/// Log a duplicate submission turned away by an action gate.
pub fn action_rejected(action: &str) {
    tracing::warn!(
        event = "action_rejected",
        action = %action,
        "action already in flight"
    );
}
