//! `ink_gallery` is the native homepage and design gallery of InkAI Studio,
//! built with the Iced GUI framework.
//!
//! The gallery core (filtering, sorting, pagination, chips, the lightbox
//! and persisted favorites) lives in [`state`] and has no UI dependencies
//! beyond a few iced value types. [`ui`] renders that state.

pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod ui;
