//! Reader page shell: owns the applied presentation and mounts the panel.
//!
//! # Design
//! - The applied state lives in the yewdux store; the panel only reports into it.
//! - Locale is resolved once per boot from the browser.

use crate::components::article::Article;
use crate::core::article::ArticleState;
use crate::core::store::{ReaderStore, record_report};
use crate::features::article_params::view::ArticleParamsForm;
use crate::i18n::TranslationBundle;
use environment::load_locale;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod environment;

#[function_component(ReaderApp)]
pub(crate) fn reader_app() -> Html {
    let bundle = use_memo(|_| TranslationBundle::new(load_locale()), ());
    let applied = use_selector(|store: &ReaderStore| store.applied);
    let reports = use_selector(|store: &ReaderStore| store.reports);
    let panel_open = use_state(|| false);
    let dispatch = Dispatch::<ReaderStore>::new();

    let on_apply = Callback::from(move |state: ArticleState| {
        dispatch.reduce_mut(|store| record_report(store, state));
    });
    let on_open_change = {
        let panel_open = panel_open.clone();
        Callback::from(move |open: bool| panel_open.set(open))
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <main
                class={classes!("reader", (*panel_open).then_some("reader_panel-open"))}
                style={applied.style_attribute()}
                lang={bundle.locale.code()}
                data-revision={reports.to_string()}
            >
                <ArticleParamsForm on_apply={on_apply} on_open_change={Some(on_open_change)} />
                <Article />
            </main>
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the reader page into `#root`, or `<body>` when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ReaderApp>::with_root(root).render();
    } else {
        yew::Renderer::<ReaderApp>::new().render();
    }
}
