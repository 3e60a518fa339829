//! Workspace facade for goshanta.
//!
//! Re-exports [`goshanta_core`] so the demos can `use goshanta_rs::prelude::*`.

pub use goshanta_core::*;
