// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the popup.
//!
//! The `App` struct wires together localization, persisted preferences and a
//! single popup controller. Its two buttons are the trigger sources: "Save
//! Data" shows a success popup and "Remove Data" an error popup.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Controller, NotificationKind, NotificationMessage};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    popup: Controller,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("popup", &self.popup)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Closing goes through `Message::WindowCloseRequested` to tear the
        // popup down first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            popup: Controller::default(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off an error popup
    /// when the settings file could not be read.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        tracing::info!(locale = %i18n.current_locale(), "starting popup demo");

        let mut app = App {
            i18n,
            popup: Controller::new(config.timeline_config()),
            theme_mode: config.general.theme_mode,
        };

        let task = match config_warning {
            Some(key) => {
                let message = app.i18n.tr(&key);
                app.update(Message::Notification(NotificationMessage::Trigger {
                    kind: NotificationKind::Error,
                    message: Some(message),
                }))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_popup_subscription(&self.popup),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(popup_message) => {
                self.popup.update(popup_message).map(Message::Notification)
            }
            Message::Trigger(kind) => {
                tracing::debug!(%kind, "demo action pressed");
                self.popup
                    .update(NotificationMessage::Trigger {
                        kind,
                        message: None,
                    })
                    .map(Message::Notification)
            }
            Message::WindowCloseRequested(id) => {
                self.popup.teardown();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            popup: &self.popup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Phase, Step};
    use std::fs;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::env_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn fire_pending(app: &mut App) {
        let pending = app
            .popup
            .timeline()
            .pending()
            .expect("a step should be pending");
        let _ = app.update(Message::Notification(NotificationMessage::Fire {
            generation: pending.generation,
            step: pending.step,
        }));
    }

    #[test]
    fn new_starts_with_a_hidden_popup() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.popup.phase(), Phase::Hidden);
            assert!(app.popup.timeline().is_settled());
        });
    }

    #[test]
    fn new_uses_the_configured_timeline() {
        with_temp_config_dir(|dir| {
            fs::write(
                dir.join("settings.toml"),
                "[timeline]\ntimer_duration_ms = 2500\n",
            )
            .expect("failed to write config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.popup.timeline().config().timer_duration_ms, 2500);
        });
    }

    #[test]
    fn corrupted_config_raises_an_error_popup() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join("settings.toml"), "[timeline\nbroken")
                .expect("failed to write config");

            let (app, _task) = App::new(Flags {
                lang: Some("en-US".into()),
                ..Flags::default()
            });

            let state = app.popup.state();
            assert_eq!(state.kind, NotificationKind::Error);
            assert_eq!(
                state.override_message.as_deref(),
                Some(app.i18n.tr("notification-config-load-error").as_str())
            );
            assert_eq!(
                app.popup.timeline().pending().map(|pending| pending.step),
                Some(Step::Appear)
            );
        });
    }

    #[test]
    fn action_buttons_trigger_their_kind() {
        let mut app = App::default();

        let _ = app.update(Message::Trigger(NotificationKind::Error));
        fire_pending(&mut app);

        assert!(app.popup.state().visible);
        assert_eq!(app.popup.state().kind, NotificationKind::Error);
        assert!(app.popup.state().override_message.is_none());
    }

    #[test]
    fn second_press_restarts_the_sequence() {
        let mut app = App::default();
        let _ = app.update(Message::Trigger(NotificationKind::Success));
        fire_pending(&mut app);
        fire_pending(&mut app);
        assert_eq!(app.popup.phase(), Phase::Expanded);

        let _ = app.update(Message::Trigger(NotificationKind::Error));

        assert_eq!(app.popup.phase(), Phase::Hidden);
        assert_eq!(app.popup.state().kind, NotificationKind::Error);
    }

    #[test]
    fn close_request_tears_the_popup_down() {
        let mut app = App::default();
        let _ = app.update(Message::Trigger(NotificationKind::Success));
        fire_pending(&mut app);

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert!(app.popup.timeline().is_settled());
        assert!(!app.popup.has_in_flight_delay());
    }

    #[test]
    fn default_theme_follows_system_mode() {
        let app = App::default();
        assert_eq!(app.theme_mode, ThemeMode::System);
    }
}
