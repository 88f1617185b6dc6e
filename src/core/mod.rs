//! Core domain logic for taskmatrix
//!
//! This module contains pure business logic with no I/O dependencies.
//! The one external collaborator is abstracted through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Level, Quadrant, Estimate, RankPolicy)
//! - `services/` - The prioritization engine
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
