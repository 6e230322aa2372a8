//! Core, DOM-free primitives and helpers for the reader UI.
pub mod article;
pub mod error;
pub mod options;
pub mod outside;
pub mod store;
