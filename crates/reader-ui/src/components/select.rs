//! Custom dropdown bound to one option catalog.
//!
//! # Design
//! - The dropdown owns only its own open flag; the selection belongs to the caller.
//! - It reuses the outside-click hook so a stray pointer closes it like the panel.

use crate::components::atoms::icons::IconChevronDown;
use crate::components::atoms::Text;
use crate::components::hooks::use_outside_click_close;
use crate::core::options::OptionType;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    pub options: &'static [OptionType],
    #[prop_or_default]
    pub selected: Option<OptionType>,
    #[prop_or_default]
    pub onchange: Callback<OptionType>,
}

/// What a key press on the dropdown trigger asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyIntent {
    Toggle,
    Close,
}

fn key_intent(key: &str) -> Option<KeyIntent> {
    match key {
        "Enter" | " " => Some(KeyIntent::Toggle),
        "Escape" => Some(KeyIntent::Close),
        _ => None,
    }
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let is_open = use_state(|| false);
    let open = *is_open;
    let root_ref = use_node_ref();

    use_outside_click_close(
        open,
        root_ref.clone(),
        {
            let is_open = is_open.clone();
            Callback::from(move |()| is_open.set(false))
        },
        None,
    );

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let on_key = {
        let is_open = is_open.clone();
        Callback::from(move |event: KeyboardEvent| match key_intent(&event.key()) {
            Some(KeyIntent::Toggle) => {
                event.prevent_default();
                is_open.set(!*is_open);
            }
            Some(KeyIntent::Close) => is_open.set(false),
            None => {}
        })
    };
    let pick = |option: OptionType| {
        let is_open = is_open.clone();
        let onchange = props.onchange.clone();
        move || {
            is_open.set(false);
            onchange.emit(option);
        }
    };
    let label = |option: &OptionType| bundle.text(&option.label_key(), option.title);

    let current = props.selected.map_or_else(
        || props.placeholder.as_ref().map_or_else(String::new, ToString::to_string),
        |option| label(&option),
    );

    html! {
        <div class="select" ref={root_ref}>
            {props.title.clone().map(|title| html! {
                <Text tag="h3" size={12} weight={800} uppercase={true}>{title}</Text>
            }).unwrap_or_default()}
            <div class={classes!("select__wrapper", open.then_some("select__wrapper_open"))}>
                <div
                    class={classes!(
                        "select__placeholder",
                        props.selected.map(|option| option.class_name)
                    )}
                    role="button"
                    tabindex="0"
                    aria-haspopup="listbox"
                    aria-expanded={open.to_string()}
                    onclick={on_toggle}
                    onkeydown={on_key}
                >
                    <Text tag="span">{current}</Text>
                    <IconChevronDown
                        class={classes!("select__arrow", open.then_some("select__arrow_open"))}
                    />
                </div>
                {if open {
                    html! {
                        <ul class="select__options" role="listbox">
                            {for props.options.iter().map(|option| {
                                let selected = props.selected.as_ref() == Some(option);
                                let on_click = {
                                    let pick = pick(*option);
                                    Callback::from(move |_: MouseEvent| pick())
                                };
                                let on_key = {
                                    let pick = pick(*option);
                                    Callback::from(move |event: KeyboardEvent| {
                                        if key_intent(&event.key()) == Some(KeyIntent::Toggle) {
                                            event.prevent_default();
                                            pick();
                                        }
                                    })
                                };
                                html! {
                                    <li
                                        key={option.value}
                                        class={classes!("select__option", option.class_name)}
                                        role="option"
                                        tabindex="0"
                                        aria-selected={selected.to_string()}
                                        onclick={on_click}
                                        onkeydown={on_key}
                                    >
                                        {option.option_class_name.map(|swatch| html! {
                                            <span class={classes!("select__swatch", swatch)}></span>
                                        }).unwrap_or_default()}
                                        <Text tag="span">{label(option)}</Text>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
