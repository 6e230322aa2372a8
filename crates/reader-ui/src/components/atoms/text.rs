//! Typographic wrapper used for every label in the panel.

use yew::prelude::*;

/// Horizontal alignment of a text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    const fn as_class(self) -> &'static str {
        match self {
            Self::Left => "text_align_left",
            Self::Center => "text_align_center",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TextProps {
    /// Element rendered around the text.
    #[prop_or("div")]
    pub tag: &'static str,
    /// Font size in pixels; mapped to a `text_size_<n>` class.
    #[prop_or(18)]
    pub size: u8,
    /// Font weight; mapped to a `text_weight_<n>` class.
    #[prop_or(400)]
    pub weight: u16,
    #[prop_or_default]
    pub italic: bool,
    #[prop_or_default]
    pub uppercase: bool,
    #[prop_or_default]
    pub align: TextAlign,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Text)]
pub(crate) fn text(props: &TextProps) -> Html {
    let classes = classes!(
        "text",
        format!("text_size_{}", props.size),
        format!("text_weight_{}", props.weight),
        props.align.as_class(),
        props.italic.then_some("text_italic"),
        props.uppercase.then_some("text_uppercase"),
        props.class.clone()
    );

    html! {
        <@{props.tag} class={classes}>
            { for props.children.iter() }
        </@>
    }
}
