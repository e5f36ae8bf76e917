//! Fire-once deferred events checked once per frame.
//!
//! Every pending event carries a key saying what it belongs to. Phase-keyed
//! events are dropped as soon as the animation phase moves on, and the scene
//! re-checks the key when an event comes due, so a transition can never fire
//! twice.

use crate::section::Section;
use crate::state::AnimationPhase;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    BeginWalking,
    ShowWelcome,
    BeginScattering,
    BeginIdle,
    /// Section change requested by clicking a scene entity.
    Navigate(Section),
    /// End of the top-level navigation cross-fade.
    FinishTransition(Section),
    /// End of the post-drag grace window for the drag with this id.
    ReleaseControl { gesture: u64 },
    HideInstructions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKey {
    /// Valid only while the animation phase equals this one.
    Phase(AnimationPhase),
    /// Valid only while this drag is the latest one.
    Gesture(u64),
    Free,
}

/// An event handed back by [`Scheduler::pop_due`]. Follow-up timers chain
/// from `due_ms` rather than the frame that noticed it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Due {
    pub due_ms: f64,
    pub key: EventKey,
    pub event: SceneEvent,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    due_ms: f64,
    seq: u64,
    key: EventKey,
    event: SceneEvent,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: SmallVec<[Pending; 8]>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after(&mut self, now_ms: f64, delay_ms: f64, key: EventKey, event: SceneEvent) {
        self.at(now_ms + delay_ms.max(0.0), key, event);
    }

    pub fn at(&mut self, due_ms: f64, key: EventKey, event: SceneEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        log::debug!("[schedule] {:?} at {:.0}ms ({:?})", event, due_ms, key);
        self.pending.push(Pending {
            due_ms,
            seq,
            key,
            event,
        });
    }

    /// Drop every phase-keyed event that does not belong to `phase`.
    pub fn retain_phase(&mut self, phase: AnimationPhase) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| match p.key {
            EventKey::Phase(owner) => owner == phase,
            _ => true,
        });
        before - self.pending.len()
    }

    /// Drop every event keyed to an older drag than `gesture`.
    pub fn retain_gesture(&mut self, gesture: u64) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| match p.key {
            EventKey::Gesture(id) => id >= gesture,
            _ => true,
        });
        before - self.pending.len()
    }

    /// Drop pending events matching `f`, whatever their key.
    pub fn cancel_matching(&mut self, f: impl Fn(&SceneEvent) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !f(&p.event));
        before - self.pending.len()
    }

    /// Take the earliest event due at or before `now_ms`, with its due time.
    /// Events due at the same instant come out in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Due> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then_with(|| a.seq.cmp(&b.seq))
            })
            .map(|(i, _)| i)?;
        let p = self.pending.remove(idx);
        Some(Due {
            due_ms: p.due_ms,
            key: p.key,
            event: p.event,
        })
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|p| p.due_ms)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn is_pending(&self, event: SceneEvent) -> bool {
        self.pending.iter().any(|p| p.event == event)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
