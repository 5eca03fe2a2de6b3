// SPDX-License-Identifier: MPL-2.0
//! Maps a timeline snapshot to a description of what the popup looks like.
//!
//! Nothing here owns state: [`present`] is a pure function of the
//! [`TimelineState`], the animation clocks recorded when flags flipped, and
//! the current instant. The iced widgets in [`super::popup`] are built from
//! the returned [`Presentation`].

use super::kind::NotificationContent;
use super::timeline::TimelineState;
use crate::ui::design_tokens::{motion, sizing};
use iced::Color;
use std::time::{Duration, Instant};

/// Outer geometry of the popup surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl Frame {
    /// The collapsed circle.
    pub const BADGE: Frame = Frame {
        width: sizing::BADGE,
        height: sizing::BADGE,
        radius: sizing::BADGE / 2.0,
    };

    /// The expanded card.
    pub const CARD: Frame = Frame {
        width: sizing::CARD_WIDTH,
        height: sizing::CARD_HEIGHT,
        radius: crate::ui::design_tokens::radius::LG,
    };

    fn lerp(from: Frame, to: Frame, t: f32) -> Frame {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Frame {
            width: mix(from.width, to.width),
            height: mix(from.height, to.height),
            radius: mix(from.radius, to.radius),
        }
    }
}

/// The round icon badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconVisual {
    pub glyph: char,
    pub accent: Color,
    /// 0.6 at the start of the entrance, 1.0 once settled.
    pub scale: f32,
    pub opacity: f32,
}

/// Countdown bar along the card's bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerBar {
    /// Fraction of the bar still filled, 1.0 down to 0.0.
    pub remaining: f32,
    pub color: Color,
}

/// Rise and fade of the whole popup right after it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    /// Pixels below the resting place, `SLIDE_DISTANCE` down to 0.
    pub offset: f32,
    /// Alpha applied to the surface and everything on it.
    pub opacity: f32,
}

impl Entrance {
    pub const SETTLED: Entrance = Entrance {
        offset: 0.0,
        opacity: 1.0,
    };
}

/// Everything the popup renders for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    /// Nothing is drawn.
    Hidden,
    /// Circle with the icon only. The frame is larger than
    /// [`Frame::BADGE`] while the card is shrinking back.
    Badge {
        frame: Frame,
        icon: IconVisual,
        entrance: Entrance,
    },
    /// Card with icon, message, dismiss affordance and, while the countdown
    /// runs, the timer bar. Icon and text alphas already include the
    /// entrance and the card content fades.
    Card {
        frame: Frame,
        icon: IconVisual,
        message: String,
        text_color: Color,
        timer: Option<TimerBar>,
        entrance: Entrance,
    },
}

impl Presentation {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Presentation::Hidden)
    }

    #[must_use]
    pub fn entrance(&self) -> Option<Entrance> {
        match self {
            Presentation::Hidden => None,
            Presentation::Badge { entrance, .. } | Presentation::Card { entrance, .. } => {
                Some(*entrance)
            }
        }
    }

    /// The dismiss affordance is only offered on the expanded card.
    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        matches!(self, Presentation::Card { .. })
    }
}

/// Instants at which the animated flags last changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationClocks {
    /// `visible` became true.
    pub shown_at: Option<Instant>,
    /// `expanded` flipped (either direction).
    pub morph_started_at: Option<Instant>,
    /// `timer_running` became true.
    pub timer_started_at: Option<Instant>,
}

impl AnimationClocks {
    /// Records which flags changed between two states.
    pub fn observe(&mut self, before: &TimelineState, after: &TimelineState, now: Instant) {
        if after.visible && !before.visible {
            self.shown_at = Some(now);
        }
        if after.expanded != before.expanded {
            self.morph_started_at = Some(now);
        }
        if after.timer_running && !before.timer_running {
            self.timer_started_at = Some(now);
        }
        if !after.visible {
            *self = Self::default();
        }
    }

    /// Whether a frame-by-frame redraw is needed at `now`.
    #[must_use]
    pub fn is_animating(&self, state: &TimelineState, now: Instant) -> bool {
        let running = |start: Option<Instant>, length: Duration| {
            start.is_some_and(|start| now.saturating_duration_since(start) < length)
        };

        let morph_length = if state.expanded {
            motion::MORPH.max(motion::MESSAGE_FADE_DELAY + motion::FADE)
        } else {
            motion::MORPH
        };

        state.visible
            && (state.timer_running
                || running(self.morph_started_at, morph_length)
                || running(self.shown_at, motion::ICON_ENTRANCE.max(motion::SLIDE_IN)))
    }
}

/// Inputs of one render.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub state: &'a TimelineState,
    pub clocks: &'a AnimationClocks,
    pub timer_duration: Duration,
    pub now: Instant,
}

/// Builds the presentation for `snapshot`. `translate` resolves the kind's
/// default message key and is only called when no override is set.
pub fn present<F>(snapshot: Snapshot<'_>, translate: F) -> Presentation
where
    F: FnOnce(&str) -> String,
{
    let Snapshot {
        state,
        clocks,
        timer_duration,
        now,
    } = snapshot;

    if !state.visible {
        return Presentation::Hidden;
    }

    let content = state.kind.content();
    let entrance = entrance(clocks.shown_at, now);
    let mut icon = icon_visual(&content, clocks.shown_at, now);
    icon.opacity *= entrance.opacity;
    let frame = morph_frame(state.expanded, clocks.morph_started_at, now);

    if !state.expanded {
        return Presentation::Badge {
            frame,
            icon,
            entrance,
        };
    }

    // Card content fades in behind the morph: container, then icon, then text.
    let fade = |delay| delayed_progress(clocks.morph_started_at, delay, motion::FADE, now);
    let content_opacity = fade(motion::CONTENT_FADE_DELAY);
    icon.opacity *= content_opacity * fade(motion::ICON_FADE_DELAY);
    let text_color = Color {
        a: content.text.a * entrance.opacity * content_opacity * fade(motion::MESSAGE_FADE_DELAY),
        ..content.text
    };

    let timer = state.timer_running.then(|| TimerBar {
        remaining: remaining_fraction(clocks.timer_started_at, timer_duration, now),
        color: Color {
            a: content.timer.a * entrance.opacity,
            ..content.timer
        },
    });

    Presentation::Card {
        frame,
        icon,
        message: content.message(state.override_message.as_deref(), translate),
        text_color,
        timer,
        entrance,
    }
}

fn progress(start: Option<Instant>, length: Duration, now: Instant) -> f32 {
    delayed_progress(start, Duration::ZERO, length, now)
}

/// Like [`progress`], but holds at 0 until `delay` has passed.
fn delayed_progress(start: Option<Instant>, delay: Duration, length: Duration, now: Instant) -> f32 {
    match start {
        None => 1.0,
        Some(start) => {
            let elapsed = now.saturating_duration_since(start);
            if elapsed < delay {
                return 0.0;
            }
            if length.is_zero() {
                return 1.0;
            }
            ((elapsed - delay).as_secs_f32() / length.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn entrance(shown_at: Option<Instant>, now: Instant) -> Entrance {
    let t = ease_out(progress(shown_at, motion::SLIDE_IN, now));
    Entrance {
        offset: motion::SLIDE_DISTANCE * (1.0 - t),
        opacity: t,
    }
}

fn morph_frame(expanded: bool, started_at: Option<Instant>, now: Instant) -> Frame {
    let t = ease_in_out(progress(started_at, motion::MORPH, now));
    if expanded {
        Frame::lerp(Frame::BADGE, Frame::CARD, t)
    } else {
        Frame::lerp(Frame::CARD, Frame::BADGE, t)
    }
}

fn icon_visual(content: &NotificationContent, shown_at: Option<Instant>, now: Instant) -> IconVisual {
    let t = progress(shown_at, motion::ICON_ENTRANCE, now);
    IconVisual {
        glyph: content.icon,
        accent: content.accent,
        scale: motion::ICON_START_SCALE + (1.0 - motion::ICON_START_SCALE) * t,
        opacity: t,
    }
}

fn remaining_fraction(started_at: Option<Instant>, length: Duration, now: Instant) -> f32 {
    1.0 - progress(started_at, length, now)
}
