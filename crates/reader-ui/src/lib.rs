#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Article reader settings panel for the web.
//! This crate holds the Yew front-end entrypoint plus the DOM-free option catalogs,
//! draft reducer and translations it is built on.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::article::{ArticleField, DEFAULT_ARTICLE_STATE};
    use crate::core::store::{ReaderStore, record_report};
    use crate::features::article_params::state::{PanelAction, PanelState};
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn panel_reports_flow_into_the_store() {
        let mut store = ReaderStore::default();
        let mut panel = PanelState::default();
        let larger = ArticleField::FontSize.options()[2];
        for action in [
            PanelAction::Toggle,
            PanelAction::Update(ArticleField::FontSize.update(larger)),
            PanelAction::Apply,
        ] {
            let (next, outcome) = panel.transition(action);
            panel = next;
            if let Some(state) = outcome.report {
                record_report(&mut store, state);
            }
        }
        assert_eq!(store.applied.font_size, larger);
        assert!(store.applied.style_attribute().contains("--font-size: 38px;"));

        let (_, outcome) = panel.transition(PanelAction::Reset);
        if let Some(state) = outcome.report {
            record_report(&mut store, state);
        }
        assert_eq!(store.applied, DEFAULT_ARTICLE_STATE);
        assert_eq!(store.reports, 2);
    }

    #[test]
    fn option_labels_translate_for_russian_readers() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        let narrow = ArticleField::ContentWidth.options()[1];
        assert_eq!(bundle.text(&narrow.label_key(), narrow.title), "Узкий");
    }
}
