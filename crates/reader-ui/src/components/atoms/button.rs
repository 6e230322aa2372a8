use crate::components::atoms::text::Text;
use yew::prelude::*;

/// Visual treatment of a form action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ButtonKind {
    /// Primary action (filled).
    Apply,
    /// Secondary action (outlined).
    Clear,
}

impl ButtonKind {
    const fn as_class(self) -> &'static str {
        match self {
            Self::Apply => "button_apply",
            Self::Clear => "button_clear",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    pub title: AttrValue,
    #[prop_or(ButtonKind::Apply)]
    pub kind: ButtonKind,
    /// Native `type` attribute (`button`, `submit`, `reset`).
    #[prop_or(AttrValue::Static("button"))]
    pub html_type: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            class={classes!("button", props.kind.as_class(), props.class.clone())}
            type={props.html_type.clone()}
            onclick={props.onclick.clone()}
        >
            <Text tag="span" weight={800} uppercase={true}>{props.title.clone()}</Text>
        </button>
    }
}
