//! Typed structures for SonarQube Web API responses and request options.
//!
//! Response structures map the wire's camelCase keys onto snake_case fields
//! and ignore keys they do not know about. Request option structures hold
//! named optional fields; unset fields are never sent.

pub mod applications;
pub mod common;
pub mod components;
pub mod hotspots;
pub mod issues;
pub mod measures;
pub mod projects;
pub mod qualitygates;
pub mod qualityprofiles;
pub mod rules;
pub mod settings;
pub mod sources;
pub mod system;
pub mod user_tokens;
pub mod users;

pub use applications::*;
pub use common::*;
pub use components::*;
pub use hotspots::*;
pub use issues::*;
pub use measures::*;
pub use projects::*;
pub use qualitygates::*;
pub use qualityprofiles::*;
pub use rules::*;
pub use settings::*;
pub use sources::*;
pub use system::*;
pub use user_tokens::*;
pub use users::*;
