//! Presentational atoms used by the settings panel.

pub(crate) mod arrow_button;
pub(crate) mod button;
pub(crate) mod icons;
pub(crate) mod separator;
pub(crate) mod text;

pub(crate) use arrow_button::ArrowButton;
pub(crate) use button::{Button, ButtonKind};
pub(crate) use separator::Separator;
pub(crate) use text::{Text, TextAlign};
