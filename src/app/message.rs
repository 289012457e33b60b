// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::intro;
use crate::ui::lightbox;
use iced::{event, window};
use std::path::PathBuf;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Path of the image to present.
    pub image_path: Option<PathBuf>,
    /// Caption shown in the panel header.
    pub title: Option<String>,
    /// Alternative text used when no title is given.
    pub alt: Option<String>,
    /// Present the trigger as a transparent overlay instead of a thumbnail.
    pub overlay: bool,
    /// Skip the intro reveal regardless of persisted state.
    pub skip_intro: bool,
    /// Override the settings directory (used by tests and portable setups).
    pub config_dir: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    Intro(intro::Message),
    ImageLoaded(Result<ImageData, Error>),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}
