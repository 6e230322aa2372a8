//! Toggle affordance that opens and closes the settings panel.

use crate::components::atoms::icons::IconArrowRight;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArrowButtonProps {
    pub is_open: bool,
    /// Accessible label announced for the toggle.
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ArrowButton)]
pub(crate) fn arrow_button(props: &ArrowButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("arrow-button", props.is_open.then_some("arrow-button_open"))}
            aria-label={props.label.clone()}
            aria-expanded={props.is_open.to_string()}
            onclick={props.onclick.clone()}
        >
            <IconArrowRight
                class={classes!("arrow-button__icon", props.is_open.then_some("arrow-button__icon_open"))}
            />
        </button>
    }
}
