//! Article body rendered with the applied presentation.

use crate::components::atoms::{Text, TextAlign};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[function_component(Article)]
pub(crate) fn article() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    html! {
        <article class="article">
            <Text tag="h1" size={45} weight={800} uppercase={true} align={TextAlign::Center}>
                {bundle.text("article.title", "")}
            </Text>
            <Text tag="p" size={22} align={TextAlign::Center} italic={true} class="article__subtitle">
                {bundle.text("article.subtitle", "")}
            </Text>
            <p class="article__text article__lead">{bundle.text("article.lead", "")}</p>
            <p class="article__text">{bundle.text("article.body", "")}</p>
        </article>
    }
}
