//! # conductor-core
//!
//! Schema and timeline construction for Conductor synchronized-action events.
//!
//! This crate provides the shared vocabulary the other conductor crates
//! depend on:
//!
//! - **Schema**: [`model::Event`] and [`model::Action`] — the wire types a
//!   mobile client decodes, with closed [`model::ActionStyle`] /
//!   [`model::HapticPattern`] enumerations
//! - **Templates**: [`template::EventTemplate`] — the pre-build form carrying
//!   per-action offsets in seconds instead of absolute times
//! - **Builder**: [`builder::build`] — resolves relative offsets against a
//!   wall-clock start into an immutable [`model::Event`]
//! - **Errors**: [`errors::ValidationError`] for build-time rejections,
//!   [`errors::SchemaError`] for decode-time diagnostics
//! - **Logging**: [`logging::init_subscriber`] for binary startup
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `conductor-codec` and `conductor-cli`.

#![deny(unsafe_code)]

pub mod builder;
pub mod errors;
pub mod logging;
pub mod model;
pub mod template;
pub mod timestamp;

pub use builder::{build, build_at};
pub use errors::{SchemaError, ValidationError};
pub use model::{Action, ActionStyle, Event, HapticPattern};
pub use template::{ActionTemplate, EventTemplate};
