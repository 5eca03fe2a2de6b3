// SPDX-License-Identifier: MPL-2.0
//! The popup's state machine.
//!
//! A [`Timeline`] drives [`TimelineState`] through a fixed chain of delayed
//! steps. It never sleeps itself: every operation hands back the next
//! [`Scheduled`] step, and the host delivers it through [`Timeline::fire`]
//! once the delay has elapsed. Each step carries the [`Generation`] it was
//! scheduled under, so a step from a superseded trigger (or from before a
//! dismiss or teardown) is recognized and dropped.
//!
//! ```text
//! Hidden -> Appearing -> Expanded -> Counting -> Collapsing -> Hidden
//!              \______________\__________\________/
//!                         dismiss()
//! ```

use super::kind::NotificationKind;
use std::time::Duration;

/// Delays between the steps of one popup lifecycle, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Trigger until the badge appears.
    pub appear_delay_ms: u64,
    /// Badge until the card expands.
    pub expand_delay_ms: u64,
    /// Card until the countdown starts.
    pub timer_start_delay_ms: u64,
    /// Length of the countdown.
    pub timer_duration_ms: u64,
    /// Collapse animation before the popup is hidden. Also used as the
    /// grace period after a dismiss.
    pub collapse_delay_ms: u64,
}

impl TimelineConfig {
    #[must_use]
    pub fn timer_duration(&self) -> Duration {
        Duration::from_millis(self.timer_duration_ms)
    }

    /// Total time from trigger to hidden when nothing interrupts.
    #[must_use]
    pub fn total(&self) -> Duration {
        Step::ALL.iter().map(|step| step.delay(self)).sum()
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            appear_delay_ms: 100,
            expand_delay_ms: 300,
            timer_start_delay_ms: 1000,
            timer_duration_ms: 4000,
            collapse_delay_ms: 300,
        }
    }
}

/// Identifies the set of steps armed by one `trigger()` or `dismiss()`.
///
/// Only meaningful within the [`Timeline`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

/// One delayed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `visible = true`
    Appear,
    /// `expanded = true`
    Expand,
    /// `timer_running = true`
    StartTimer,
    /// `timer_running = false, expanded = false`
    Collapse,
    /// `visible = false`
    Hide,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Appear,
        Step::Expand,
        Step::StartTimer,
        Step::Collapse,
        Step::Hide,
    ];

    /// Delay between the previous step (or the trigger) and this one.
    #[must_use]
    pub fn delay(self, config: &TimelineConfig) -> Duration {
        let ms = match self {
            Step::Appear => config.appear_delay_ms,
            Step::Expand => config.expand_delay_ms,
            Step::StartTimer => config.timer_start_delay_ms,
            Step::Collapse => config.timer_duration_ms,
            Step::Hide => config.collapse_delay_ms,
        };
        Duration::from_millis(ms)
    }

    /// The step chained after this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Appear => Some(Step::Expand),
            Step::Expand => Some(Step::StartTimer),
            Step::StartTimer => Some(Step::Collapse),
            Step::Collapse => Some(Step::Hide),
            Step::Hide => None,
        }
    }
}

/// Coarse lifecycle phase, derived from the flags and the pending step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    /// Round badge, about to expand.
    Appearing,
    /// Card without countdown.
    Expanded,
    /// Card with countdown.
    Counting,
    /// Shrinking back to the badge before hiding.
    Collapsing,
    /// Left on screen by [`Timeline::teardown`]. Nothing runs until the next
    /// trigger.
    TornDown,
}

/// Flags the presenter renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineState {
    pub visible: bool,
    pub expanded: bool,
    pub timer_running: bool,
    pub kind: NotificationKind,
    pub override_message: Option<String>,
}

impl TimelineState {
    fn apply(&mut self, step: Step) {
        match step {
            Step::Appear => self.visible = true,
            Step::Expand => self.expanded = true,
            Step::StartTimer => self.timer_running = true,
            Step::Collapse => {
                self.timer_running = false;
                self.expanded = false;
            }
            Step::Hide => self.visible = false,
        }
        debug_assert!(self.holds_invariants(), "{self:?}");
    }

    /// `timer_running` implies `expanded`, which implies `visible`.
    #[must_use]
    pub fn holds_invariants(&self) -> bool {
        (!self.expanded || self.visible) && (!self.timer_running || self.expanded)
    }
}

/// A step the host must deliver back through [`Timeline::fire`] once
/// `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub generation: Generation,
    pub step: Step,
    pub delay: Duration,
}

/// Owns one popup's state and its pending step.
#[derive(Debug, Default)]
pub struct Timeline {
    config: TimelineConfig,
    state: TimelineState,
    generation: u64,
    pending: Option<Scheduled>,
    torn_down: bool,
}

impl Timeline {
    #[must_use]
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    /// The step currently armed, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Scheduled> {
        self.pending
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        Generation(self.generation)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        let state = &self.state;
        if !state.visible {
            Phase::Hidden
        } else if self.torn_down {
            Phase::TornDown
        } else if state.timer_running {
            Phase::Counting
        } else if state.expanded {
            Phase::Expanded
        } else if self.pending_step() == Some(Step::Expand) {
            Phase::Appearing
        } else {
            Phase::Collapsing
        }
    }

    /// Starts a fresh lifecycle, invalidating everything still pending.
    pub fn trigger(&mut self, kind: NotificationKind, override_message: Option<String>) -> Scheduled {
        let generation = self.invalidate();
        self.torn_down = false;
        tracing::debug!(?generation, %kind, "popup triggered");

        self.state = TimelineState {
            visible: false,
            expanded: false,
            timer_running: false,
            kind,
            override_message,
        };
        self.arm(generation, Step::Appear)
    }

    /// Collapses a visible popup now and hides it after the collapse delay.
    ///
    /// Returns `None` (and changes nothing) when the popup is not visible,
    /// is already collapsing towards hidden, or was torn down.
    pub fn dismiss(&mut self) -> Option<Scheduled> {
        if matches!(
            self.phase(),
            Phase::Hidden | Phase::Collapsing | Phase::TornDown
        ) {
            return None;
        }

        let generation = self.invalidate();
        tracing::debug!(?generation, "popup dismissed");

        self.state.timer_running = false;
        self.state.expanded = false;
        Some(self.arm(generation, Step::Hide))
    }

    /// Applies a delivered step and returns its successor.
    ///
    /// Steps that are not the one currently armed (superseded generation,
    /// cancelled by dismiss or teardown, or delivered twice) are ignored.
    pub fn fire(&mut self, generation: Generation, step: Step) -> Option<Scheduled> {
        match self.pending {
            Some(pending) if pending.generation == generation && pending.step == step => {}
            _ => {
                tracing::debug!(?generation, ?step, "dropping stale popup step");
                return None;
            }
        }

        self.pending = None;
        self.state.apply(step);
        tracing::debug!(?generation, ?step, phase = ?self.phase(), "popup step applied");

        step.next().map(|next| self.arm(generation, next))
    }

    /// Cancels everything pending. The state is left as is and reports
    /// [`Phase::TornDown`] while visible.
    pub fn teardown(&mut self) {
        if self.pending.is_some() {
            tracing::debug!(generation = ?self.generation(), "popup torn down with a pending step");
        }
        self.invalidate();
        self.torn_down = true;
    }

    /// Whether no step is armed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending.is_none()
    }

    fn pending_step(&self) -> Option<Step> {
        self.pending.map(|pending| pending.step)
    }

    /// Drops the pending step and moves to a new generation.
    fn invalidate(&mut self) -> Generation {
        self.pending = None;
        self.generation += 1;
        Generation(self.generation)
    }

    fn arm(&mut self, generation: Generation, step: Step) -> Scheduled {
        let scheduled = Scheduled {
            generation,
            step,
            delay: step.delay(&self.config),
        };
        self.pending = Some(scheduled);
        scheduled
    }
}
