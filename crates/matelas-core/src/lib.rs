//! Matelas Core Types and Layout Engines
//!
//! This crate provides the foundational types and the point placement
//! algorithms used by Matelas. It includes:
//!
//! - **Geometry**: Points, rectangles and bounds ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Layout**: Deterministic point layout engines ([`layout`] module)
//! - **Errors**: Failures raised by the engines ([`error::LayoutError`])

pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
