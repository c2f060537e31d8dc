//! Backend services.
//!
//! This module provides the HTTP wrappers for the `/_functions` endpoints:
//!
//! # Services
//!
//! - [`sites`] - Site registry lookup
//! - [`logs`] - Activity log retrieval and clearing
//! - [`import`] - Per-address member import and result mapping

pub mod sites;
pub mod logs;
pub mod import;

pub use sites::*;
pub use logs::*;
pub use import::*;
