// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a modal image previewer built with the Iced GUI framework.
//!
//! It presents a trigger surface (thumbnail or transparent overlay) that opens
//! a dismissable modal with a pannable, zoomable view of a single image, plus a
//! once-per-installation intro reveal.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
