//! Toast queue for user-facing feedback.

use std::collections::VecDeque;

use outfitvote_core::models::Notification;

/// Notifications pushed by workflow operations, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    /// Most recent notification, if any.
    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    /// Remove and return everything queued so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_in_order() {
        let mut n = Notifications::new();
        n.success("one");
        n.error("two");
        assert_eq!(n.latest().unwrap().message, "two");

        let drained = n.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "one");
        assert!(drained[1].is_error());
        assert!(n.is_empty());
    }
}
