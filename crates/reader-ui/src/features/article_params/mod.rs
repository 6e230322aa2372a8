//! Article settings panel: draft state, reducer and view.
//!
//! # Design
//! - Keep the draft local to the panel; only apply/reset reach the owner.
//! - All decisions live in `state`; the view wires DOM events onto actions.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
