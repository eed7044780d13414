// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the page logic and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to infrastructure only through these ports

pub mod port;
