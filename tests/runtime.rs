// SPDX-License-Identifier: MPL-2.0
//! Runs the popup `Controller` on real tokio timers with a paused clock.
//!
//! Every `Task` the controller returns is turned into a stream and polled on
//! its own tokio task, the way the iced runtime does it, so the abortable
//! delays and their cancellation are exercised as shipped.

use futures_util::StreamExt;
use iced::Task;
use iced_popup::ui::notifications::{
    Controller, Generation, NotificationKind, NotificationMessage, Phase, Step, TimelineConfig,
};
use iced_runtime::Action;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

struct Host {
    controller: Controller,
    tx: mpsc::UnboundedSender<NotificationMessage>,
    rx: mpsc::UnboundedReceiver<NotificationMessage>,
    start: Instant,
    delivered: Vec<(Generation, Step)>,
}

impl Host {
    fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            controller: Controller::new(TimelineConfig::default()),
            tx,
            rx,
            start: Instant::now(),
            delivered: Vec::new(),
        }
    }

    fn spawn(&self, task: Task<NotificationMessage>) {
        let Some(mut stream) = iced_runtime::task::into_stream(task) else {
            return;
        };
        let tx = self.tx.clone();
        tokio::spawn(async move {
            while let Some(action) = stream.next().await {
                if let Action::Output(message) = action {
                    let _ = tx.send(message);
                }
            }
        });
    }

    fn update(&mut self, message: NotificationMessage) {
        if let NotificationMessage::Fire { generation, step } = &message {
            self.delivered.push((*generation, *step));
        }
        let task = self.controller.update(message);
        self.spawn(task);
    }

    fn trigger(&mut self, kind: NotificationKind) {
        self.update(NotificationMessage::Trigger {
            kind,
            message: None,
        });
    }

    /// Delivers every message produced until `at_ms` after start.
    async fn run_until(&mut self, at_ms: u64) {
        let deadline = self.start + Duration::from_millis(at_ms);
        loop {
            tokio::select! {
                Some(message) = self.rx.recv() => self.update(message),
                () = time::sleep_until(deadline) => break,
            }
        }
    }

    fn phase(&self) -> Phase {
        self.controller.phase()
    }
}

#[tokio::test(start_paused = true)]
async fn full_lifecycle_on_tokio_timers() {
    let mut host = Host::new();
    host.trigger(NotificationKind::Success);

    let checkpoints = [
        (50, Phase::Hidden),
        (150, Phase::Appearing),
        (450, Phase::Expanded),
        (1450, Phase::Counting),
        (5450, Phase::Collapsing),
        (5750, Phase::Hidden),
    ];
    for (at_ms, phase) in checkpoints {
        host.run_until(at_ms).await;
        assert_eq!(host.phase(), phase, "phase at t={at_ms}ms");
        assert!(host.controller.state().holds_invariants());
    }

    assert!(host.controller.timeline().is_settled());
    assert!(!host.controller.has_in_flight_delay());
    assert_eq!(host.delivered.len(), Step::ALL.len());
}

#[tokio::test(start_paused = true)]
async fn retrigger_then_dismiss_leaves_no_trace_of_the_first_sequence() {
    let mut host = Host::new();
    host.trigger(NotificationKind::Success);
    let first = host.controller.timeline().generation();

    host.run_until(50).await;
    host.trigger(NotificationKind::Error);

    host.run_until(120).await;
    assert_eq!(host.phase(), Phase::Hidden);

    host.run_until(160).await;
    assert_eq!(host.phase(), Phase::Appearing);
    assert_eq!(host.controller.state().kind, NotificationKind::Error);

    host.run_until(2050).await;
    assert_eq!(host.phase(), Phase::Counting);
    host.update(NotificationMessage::Dismiss);
    assert_eq!(host.phase(), Phase::Collapsing);

    host.run_until(2300).await;
    assert_eq!(host.phase(), Phase::Collapsing);

    host.run_until(2400).await;
    assert_eq!(host.phase(), Phase::Hidden);
    let settled = host.controller.state().clone();

    host.run_until(9000).await;
    assert_eq!(host.controller.state(), &settled);

    let steps: Vec<Step> = host.delivered.iter().map(|(_, step)| *step).collect();
    assert_eq!(
        steps,
        vec![Step::Appear, Step::Expand, Step::StartTimer, Step::Hide]
    );
    assert!(host
        .delivered
        .iter()
        .all(|(generation, _)| *generation != first));
}

#[tokio::test(start_paused = true)]
async fn teardown_aborts_the_in_flight_delay() {
    let mut host = Host::new();
    host.trigger(NotificationKind::Error);
    host.run_until(450).await;
    assert_eq!(host.phase(), Phase::Expanded);

    host.controller.teardown();
    assert!(!host.controller.has_in_flight_delay());
    let frozen = host.controller.state().clone();
    let delivered = host.delivered.len();

    host.run_until(10_000).await;
    assert_eq!(host.controller.state(), &frozen);
    assert_eq!(host.delivered.len(), delivered);
    assert_eq!(host.phase(), Phase::TornDown);
}
