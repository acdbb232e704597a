#![forbid(unsafe_code)]

//! Leaf primitives for the msgbar presentation library.
//!
//! This crate has no opinion about queues, surfaces, or styling. It provides
//! the three things every layer above needs: floating-point geometry in
//! logical points, dt-driven animation primitives, and text measurement.

pub mod animation;
pub mod geometry;
pub mod text;
