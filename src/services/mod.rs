//! UI-independent services.

pub mod geometry;
