//! Feature slices of the reader UI.

pub mod article_params;
