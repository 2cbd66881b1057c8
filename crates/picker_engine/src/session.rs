//! Generation panel lifecycle.
//!
//! Each panel moves through `Idle -> Validating -> {Error, Sampling} ->
//! Presenting -> Idle`. The dice panel additionally passes through a
//! `Rolling` suspension between successful validation and sampling: a
//! fixed-duration pause with no retry or cancellation semantics, during
//! which further triggers are ignored.
//!
//! The engine owns none of this at runtime. [`PanelPhase::step`] is a pure
//! function; the caller keeps the current phase in a [`Panel`] (one per
//! visible panel), dispatches events, and performs the actual pause and
//! rendering itself. That keeps every engine entry point reentrant and
//! makes the "ignore triggers while a roll is pending" guard ordinary
//! caller-owned state instead of hidden globals.

/// Whether a panel's result computation is paced by a fixed pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Results are computed synchronously after validation.
    Immediate,
    /// A fixed-duration pause precedes sampling (the dice panel).
    Paced,
}

/// One generation panel's position in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    /// Waiting for a trigger.
    #[default]
    Idle,
    /// Constraints are being checked.
    Validating,
    /// Validation failed; the error message is on screen.
    Error,
    /// Paced pause in progress; triggers are ignored.
    Rolling,
    /// Drawing results.
    Sampling,
    /// Results are on screen.
    Presenting,
}

/// An observable panel event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    /// The user asked for a generation.
    Trigger,
    /// Validation rejected the request.
    Rejected,
    /// Validation accepted the request.
    Validated,
    /// The paced pause finished.
    DelayElapsed,
    /// The draw completed.
    Sampled,
    /// The results were rendered.
    Presented,
}

impl PanelPhase {
    /// Advances the phase by one event.
    ///
    /// Unexpected `(phase, event)` pairs leave the phase unchanged; in
    /// particular a second `Trigger` while `Rolling` is a no-op, which is
    /// the dice panel's re-entry guard.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use picker_engine::session::{Pacing, PanelEvent, PanelPhase};
    ///
    /// let phase = PanelPhase::Idle.step(Pacing::Paced, PanelEvent::Trigger);
    /// assert_eq!(phase, PanelPhase::Validating);
    ///
    /// let rolling = phase.step(Pacing::Paced, PanelEvent::Validated);
    /// assert_eq!(rolling, PanelPhase::Rolling);
    /// assert_eq!(rolling.step(Pacing::Paced, PanelEvent::Trigger), rolling);
    /// ```
    #[must_use]
    pub fn step(self, pacing: Pacing, event: PanelEvent) -> PanelPhase {
        use PanelEvent::*;
        use PanelPhase::*;
        match (self, event) {
            (Idle | Error | Presenting, Trigger) => Validating,
            (Validating, Rejected) => Error,
            (Validating, Validated) => match pacing {
                Pacing::Immediate => Sampling,
                Pacing::Paced => Rolling,
            },
            (Rolling, DelayElapsed) => Sampling,
            (Sampling, Sampled) => Presenting,
            (Presenting, Presented) => Idle,
            (phase, _) => phase,
        }
    }
}

/// Caller-owned state container for one panel.
///
/// Thin convenience over [`PanelPhase::step`]: remembers the pacing and
/// the current phase so the caller dispatches bare events.
#[derive(Clone, Copy, Debug)]
pub struct Panel {
    phase: PanelPhase,
    pacing: Pacing,
}

impl Panel {
    /// Creates an idle panel with the given pacing.
    pub fn new(pacing: Pacing) -> Self {
        Self {
            phase: PanelPhase::Idle,
            pacing,
        }
    }

    /// Returns the current phase.
    #[inline]
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Returns `true` while a paced pause is pending and triggers are
    /// ignored.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.phase == PanelPhase::Rolling
    }

    /// Applies an event and returns the new phase.
    pub fn apply(&mut self, event: PanelEvent) -> PanelPhase {
        self.phase = self.phase.step(self.pacing, event);
        self.phase
    }
}
