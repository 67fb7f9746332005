//! # BASIC Screen Runtime
//!
//! The logical screen state for a GW-BASIC style interpreter: the
//! addressable text pages with their cursor and viewport state machine,
//! and the masked pixel grids behind the graphics statements.
//!
//! This crate only maintains buffer state. Rasterization and display
//! belong to a video front end, which consumes snapshots of these
//! buffers between statements and implements the [`display::Cursor`]
//! and [`display::EventSink`] contracts.

pub mod display;
pub mod lang;
