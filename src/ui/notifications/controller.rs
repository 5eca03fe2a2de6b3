// SPDX-License-Identifier: MPL-2.0
//! Runs a [`Timeline`] on the iced runtime.
//!
//! Every scheduled step becomes a [`Task`] that sleeps for the step's delay
//! and then emits [`Message::Fire`]. Only one such task is in flight at a
//! time; its abort handle is kept so retrigger, dismiss and teardown can
//! release it. Even if an aborted task slips a message through, the
//! timeline drops it because its generation is no longer current.

use super::kind::NotificationKind;
use super::popup::Popup;
use super::presenter::{self, AnimationClocks, Presentation, Snapshot};
use super::timeline::{Generation, Phase, Scheduled, Step, Timeline, TimelineConfig, TimelineState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::motion;
use iced::task::Handle;
use iced::{time, Element, Subscription, Task};
use std::fmt;
use std::time::Instant;

/// Messages driving the popup.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a popup, replacing whatever is on screen.
    Trigger {
        kind: NotificationKind,
        message: Option<String>,
    },
    /// Collapse and hide the visible popup.
    Dismiss,
    /// A delayed step came due.
    Fire { generation: Generation, step: Step },
    /// Animation frame.
    Tick(Instant),
}

/// One mounted popup: its timeline, the in-flight delay and the clocks the
/// presenter animates from.
pub struct Controller {
    timeline: Timeline,
    in_flight: Option<Handle>,
    clocks: AnimationClocks,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("timeline", &self.timeline)
            .field("in_flight", &self.in_flight.is_some())
            .field("clocks", &self.clocks)
            .finish()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl Controller {
    #[must_use]
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            timeline: Timeline::new(config),
            in_flight: None,
            clocks: AnimationClocks::default(),
        }
    }

    /// Handles a popup message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Trigger { kind, message } => self.trigger(kind, message),
            Message::Dismiss => self.dismiss(),
            Message::Fire { generation, step } => self.fire(generation, step),
            Message::Tick(_) => Task::none(),
        }
    }

    /// Shows a popup of `kind`, cancelling any sequence still running.
    pub fn trigger(&mut self, kind: NotificationKind, message: Option<String>) -> Task<Message> {
        self.cancel_in_flight();
        let scheduled = self.apply(|timeline| Some(timeline.trigger(kind, message)));
        self.schedule(scheduled)
    }

    /// Collapses the popup now and hides it after the collapse delay.
    /// Does nothing when no popup is visible.
    pub fn dismiss(&mut self) -> Task<Message> {
        let scheduled = self.apply(Timeline::dismiss);
        if scheduled.is_some() {
            self.cancel_in_flight();
        }
        self.schedule(scheduled)
    }

    /// Cancels everything pending. Called on drop as well.
    pub fn teardown(&mut self) {
        self.cancel_in_flight();
        self.timeline.teardown();
    }

    fn fire(&mut self, generation: Generation, step: Step) -> Task<Message> {
        let current = self
            .timeline
            .pending()
            .is_some_and(|pending| pending.generation == generation && pending.step == step);
        if current {
            // The delay that produced this message has completed.
            self.in_flight = None;
        }
        let next = self.apply(|timeline| timeline.fire(generation, step));
        self.schedule(next)
    }

    /// Runs a timeline operation and records which animated flags changed.
    fn apply<F>(&mut self, operation: F) -> Option<Scheduled>
    where
        F: FnOnce(&mut Timeline) -> Option<Scheduled>,
    {
        let before = self.timeline.state().clone();
        let scheduled = operation(&mut self.timeline);
        self.clocks
            .observe(&before, self.timeline.state(), Instant::now());
        scheduled
    }

    fn schedule(&mut self, scheduled: Option<Scheduled>) -> Task<Message> {
        let Some(Scheduled {
            generation,
            step,
            delay,
        }) = scheduled
        else {
            return Task::none();
        };

        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::Fire { generation, step },
        )
        .abortable();
        self.in_flight = Some(handle);
        task
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn state(&self) -> &TimelineState {
        self.timeline.state()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.timeline.phase()
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Whether a delayed step is currently awaited on the runtime.
    #[must_use]
    pub fn has_in_flight_delay(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Describes the popup as it looks at `now`.
    pub fn presentation(&self, i18n: &I18n, now: Instant) -> Presentation {
        presenter::present(
            Snapshot {
                state: self.timeline.state(),
                clocks: &self.clocks,
                timer_duration: self.timeline.config().timer_duration(),
                now,
            },
            |key| i18n.tr(key),
        )
    }

    /// Renders the popup overlay, anchored to the bottom centre.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        Popup::view_overlay(self.presentation(i18n, Instant::now()), i18n)
    }

    /// Frame ticks while something animates.
    pub fn subscription(&self) -> Subscription<Message> {
        if self
            .clocks
            .is_animating(self.timeline.state(), Instant::now())
        {
            time::every(motion::FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_pending(controller: &mut Controller) {
        let pending = controller
            .timeline()
            .pending()
            .expect("a step should be pending");
        let _ = controller.update(Message::Fire {
            generation: pending.generation,
            step: pending.step,
        });
    }

    #[test]
    fn trigger_arms_a_delay_and_resets_state() {
        let mut controller = Controller::default();
        let _ = controller.update(Message::Trigger {
            kind: NotificationKind::Success,
            message: None,
        });

        assert!(controller.has_in_flight_delay());
        assert_eq!(controller.phase(), Phase::Hidden);
        assert_eq!(
            controller.timeline().pending().map(|pending| pending.step),
            Some(Step::Appear)
        );
    }

    #[test]
    fn stale_fire_message_is_ignored() {
        let mut controller = Controller::default();
        let _ = controller.trigger(NotificationKind::Success, None);
        let stale = controller.timeline().pending().expect("appear should be armed");
        let _ = controller.trigger(NotificationKind::Error, None);

        let _ = controller.update(Message::Fire {
            generation: stale.generation,
            step: stale.step,
        });

        assert!(!controller.state().visible);
        assert_eq!(controller.state().kind, NotificationKind::Error);
        assert!(controller.has_in_flight_delay());
    }

    #[test]
    fn dismiss_without_popup_changes_nothing() {
        let mut controller = Controller::default();
        let _ = controller.update(Message::Dismiss);

        assert_eq!(controller.state(), &TimelineState::default());
        assert!(!controller.has_in_flight_delay());
    }

    #[test]
    fn dismiss_from_the_card_collapses_and_arms_hide() {
        let mut controller = Controller::default();
        let _ = controller.trigger(NotificationKind::Success, None);
        fire_pending(&mut controller);
        fire_pending(&mut controller);
        assert_eq!(controller.phase(), Phase::Expanded);

        let _ = controller.update(Message::Dismiss);

        assert!(controller.state().visible);
        assert!(!controller.state().expanded);
        assert_eq!(
            controller.timeline().pending().map(|pending| pending.step),
            Some(Step::Hide)
        );
    }

    #[test]
    fn fire_chains_the_next_delay() {
        let mut controller = Controller::default();
        let _ = controller.trigger(NotificationKind::Success, None);
        fire_pending(&mut controller);

        assert!(controller.state().visible);
        assert!(controller.has_in_flight_delay());
        assert_eq!(
            controller.timeline().pending().map(|pending| pending.step),
            Some(Step::Expand)
        );
    }

    #[test]
    fn full_sequence_leaves_nothing_in_flight() {
        let mut controller = Controller::default();
        let _ = controller.trigger(NotificationKind::Error, None);
        while controller.timeline().pending().is_some() {
            fire_pending(&mut controller);
        }

        assert_eq!(controller.phase(), Phase::Hidden);
        assert!(!controller.has_in_flight_delay());
    }

    #[test]
    fn teardown_releases_the_in_flight_delay() {
        let mut controller = Controller::default();
        let _ = controller.trigger(NotificationKind::Success, None);
        fire_pending(&mut controller);
        let snapshot = controller.state().clone();

        controller.teardown();

        assert!(!controller.has_in_flight_delay());
        assert!(controller.timeline().is_settled());
        assert_eq!(controller.state(), &snapshot);
    }

    #[test]
    fn presentation_follows_the_state() {
        let i18n = I18n::new(Some("en-US".into()), None, &crate::config::Config::default());
        let mut controller = Controller::default();
        assert!(controller.presentation(&i18n, Instant::now()).is_hidden());

        let _ = controller.trigger(NotificationKind::Success, Some("Custom".into()));
        fire_pending(&mut controller);
        fire_pending(&mut controller);

        match controller.presentation(&i18n, Instant::now()) {
            Presentation::Card { message, .. } => assert_eq!(message, "Custom"),
            other => panic!("expected card, got {other:?}"),
        }
    }
}
