// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the lightbox and the
//! intro reveal.
//!
//! The `App` struct wires together the components and translates their
//! effects into side effects like the close-delay timer, config persistence,
//! and image loading. Policy decisions (window sizing, persistence timing)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::media::{self, ImageData};
use crate::ui::intro;
use crate::ui::lightbox::{self, component::Props, TriggerMode};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state bridging the lightbox, the intro reveal, and
/// persisted preferences.
#[derive(Debug)]
pub struct App {
    lightbox: lightbox::State,
    intro: intro::State,
    media: Option<ImageData>,
    config: Config,
    config_dir: Option<PathBuf>,
    load_error: Option<String>,
    window_title: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            lightbox: lightbox::State::default(),
            intro: intro::State::default(),
            media: None,
            config: Config::default(),
            config_dir: None,
            load_error: None,
            window_title: "Iced Lightbox".to_owned(),
        }
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
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
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off asynchronous image loading
    /// based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_dir.as_deref()).unwrap_or_else(|error| {
            eprintln!("Failed to load config: {error}");
            Config::default()
        });

        let props = Props {
            title: flags.title.clone(),
            alt: flags.alt.clone().unwrap_or_else(|| "Preview".to_owned()),
            mode: if flags.overlay {
                TriggerMode::Overlay
            } else {
                TriggerMode::Thumbnail
            },
        };

        let mut lightbox = lightbox::State::new(props);
        lightbox.set_zoom_step(config.effective_zoom_step());
        lightbox.set_max_scale(config.effective_max_scale());

        // The title prefers the caption, then the file name being shown.
        let window_title = flags
            .title
            .clone()
            .or_else(|| {
                flags
                    .image_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .map_or_else(
                || "Iced Lightbox".to_owned(),
                |label| format!("{label} - Iced Lightbox"),
            );

        let mut app = App {
            lightbox,
            config,
            config_dir: flags.config_dir.clone(),
            window_title,
            ..Self::default()
        };

        if !flags.skip_intro && app.config.intro_pending() {
            let _ = app
                .intro
                .handle(intro::Message::Start(Instant::now()));
        }

        let load_task = match flags.image_path {
            Some(path) => Task::perform(media::load_image_async(path), Message::ImageLoaded),
            None => Task::none(),
        };

        (app, load_task)
    }

    fn title(&self) -> String {
        self.window_title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Persists the current preferences, reporting failures on stderr.
    fn persist_config(&self) {
        if cfg!(test) {
            return;
        }
        if let Err(error) = config::save(&self.config, self.config_dir.as_deref()) {
            eprintln!("Failed to save config: {error}");
        }
    }
}
