//! Rendering code built on top of the [`crate::abs`] wrappers.

pub mod quad;
