//! Radio group bound to one option catalog.

use crate::components::atoms::Text;
use crate::core::article::ArticleField;
use crate::core::options::{OptionType, find_by_value};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RadioGroupProps {
    /// Field whose catalog backs the group; also the input `name`.
    pub field: ArticleField,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub options: &'static [OptionType],
    pub selected: OptionType,
    #[prop_or_default]
    pub onchange: Callback<OptionType>,
}

#[function_component(RadioGroup)]
pub(crate) fn radio_group(props: &RadioGroupProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let name = props.field.as_str();
    let onchange = {
        let onchange = props.onchange.clone();
        let field = props.field;
        let options = props.options;
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            match find_by_value(field, options, &input.value()) {
                Ok(option) => onchange.emit(option),
                Err(err) => {
                    console::error!("radio value rejected", field.as_str(), err.to_string());
                }
            }
        })
    };

    html! {
        <div class="radio-group">
            {props.title.clone().map(|title| html! {
                <Text tag="h3" size={12} weight={800} uppercase={true}>{title}</Text>
            }).unwrap_or_default()}
            <div class="radio-group__items" role="radiogroup">
                {for props.options.iter().map(|option| {
                    let id = format!("{name}_{}", option.id);
                    let checked = *option == props.selected;
                    html! {
                        <div
                            key={option.value}
                            class={classes!("radio-group__item", checked.then_some("radio-group__item_checked"))}
                        >
                            <input
                                class="radio-group__input"
                                type="radio"
                                id={id.clone()}
                                name={name}
                                value={option.value}
                                checked={checked}
                                onchange={onchange.clone()}
                            />
                            <label class="radio-group__label" for={id}>
                                <Text tag="span" uppercase={true} class={option.class_name}>
                                    {bundle.text(&option.label_key(), option.title)}
                                </Text>
                            </label>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
