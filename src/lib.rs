//! # scopeworks
//!
//! Settings workbench for the Scopeworks decisioning demo.
//!
//! A single scrollable window for editing the identifiers a demo client
//! sends to the decisioning service: environment file id, encoded decision
//! scopes, target mbox, order and product identifiers, and three
//! dynamically sized key/value parameter lists. An inspector session can be
//! started against a session URL straight from the form.
//!
//! # Architecture
//!
//! ```text
//! main ──► SettingsApp ──► update() ──► AppState { SettingsModel, ... }
//!              └────────── view() ◄─────────────┘
//! ```
//!
//! Every keystroke flows through a [`message::Message`] and lands in the
//! [`model::SettingsModel`]; the view is a pure function of [`state::AppState`].

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Main iced application (update/view/subscription)
pub mod app;

/// Message types for the Elm update loop
pub mod message;

/// The editable settings model
pub mod model;

/// Key/value parameter lists
///
/// Implements the append/remove row editor shared by the mbox, profile and
/// order parameter sections: the last row's button appends a fresh blank
/// pair, every other row's button removes that row.
pub mod params;

/// Inspector session handling
pub mod session;

/// The settings form view
pub mod settings;

/// Application state
pub mod state;

/// Color palette and widget styles
pub mod theme;

/// Reusable widget builders
pub mod widgets;
