use std::time::Duration;

use super::tree::NodeId;
use crate::element::{Effect, OnComplete};

/// What an animation moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Target {
    Window,
    Node(NodeId),
}

pub(crate) struct PendingAnimation {
    pub(crate) target: Target,
    pub(crate) effect: Effect,
    pub(crate) duration: Duration,
    pub(crate) on_complete: OnComplete,
}

impl std::fmt::Debug for PendingAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingAnimation")
            .field("target", &self.target)
            .field("effect", &self.effect)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

/// Animations scheduled but not yet finished, in scheduling order
#[derive(Debug, Default)]
pub(crate) struct AnimationQueue {
    pending: Vec<PendingAnimation>,
}

impl AnimationQueue {
    pub(crate) fn push(&mut self, animation: PendingAnimation) {
        log::debug!(
            "scheduled {:?} on {:?} for {} ms",
            animation.effect,
            animation.target,
            animation.duration.as_millis()
        );
        self.pending.push(animation);
    }

    /// Take everything scheduled so far. Animations scheduled while these
    /// finish land in the next batch.
    pub(crate) fn drain(&mut self) -> Vec<PendingAnimation> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}
