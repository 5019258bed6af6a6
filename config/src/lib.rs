//! # Config Crate
//!
//! Centralized configuration constants for parametric mesh generation.
//! All default resolutions, clamping minimums and numeric tolerances are
//! defined here so the generators never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_ANGULAR_RESOLUTION, MIN_ANGULAR_RESOLUTION};
//!
//! // Resolutions below the minimum are raised, never rejected
//! let requested = 2;
//! let angular = requested.max(MIN_ANGULAR_RESOLUTION);
//! assert_eq!(angular, 3);
//! assert!(DEFAULT_ANGULAR_RESOLUTION >= MIN_ANGULAR_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Clamp, Don't Reject**: Minimums describe the coarsest valid mesh
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
