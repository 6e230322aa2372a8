pub(crate) mod article;
pub(crate) mod atoms;
pub(crate) mod hooks;
pub(crate) mod radio_group;
pub(crate) mod select;
