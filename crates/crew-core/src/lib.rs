//! # crew-core
//!
//! Core types and decision logic for declaring team authorization.
//!
//! This crate provides:
//! - [`AuthorizationConfig`] and the provider-qualified identifier builder
//! - The safety policy that decides whether a configuration may be submitted
//! - Deterministic preview rendering shown before confirmation
//! - Wire types for the create-or-update contract ([`TeamRequest`], [`Team`],
//!   [`SubmissionOutcome`])

pub mod auth;
pub mod errors;
pub mod policy;
pub mod preview;
pub mod team;

pub use auth::{AuthorizationBuilder, AuthorizationConfig, Provider};
pub use errors::CoreError;
pub use policy::{PolicyVerdict, PolicyViolation, validate};
pub use preview::render_preview;
pub use team::{SubmissionOutcome, Team, TeamAuth, TeamRequest};
