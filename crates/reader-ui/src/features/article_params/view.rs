//! Collapsible settings panel view.
//!
//! # Design
//! - The reducer owns the open flag and draft; callbacks only translate DOM events.
//! - Owner notifications are emitted synchronously from the handler that caused them.
//! - The toggle sits inside the watched region so it never races the outside-click close.

use crate::components::atoms::{ArrowButton, Button, ButtonKind, Separator, Text};
use crate::components::hooks::use_outside_click_close;
use crate::components::radio_group::RadioGroup;
use crate::components::select::Select;
use crate::core::article::{ArticleField, ArticleState};
use crate::core::options::OptionType;
use crate::features::article_params::state::{PanelAction, PanelState};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArticleParamsFormProps {
    /// Receives the draft on apply and the default on reset.
    pub on_apply: Callback<ArticleState>,
    /// Receives the open flag whenever it changes.
    #[prop_or_default]
    pub on_open_change: Option<Callback<bool>>,
}

#[function_component(ArticleParamsForm)]
pub(crate) fn article_params_form(props: &ArticleParamsFormProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = {
        let bundle = bundle.clone();
        move |key: &str, fallback: &str| AttrValue::from(bundle.text(key, fallback))
    };
    let panel = use_reducer(PanelState::default);
    let root_ref = use_node_ref();

    let run = {
        let panel = panel.clone();
        let on_apply = props.on_apply.clone();
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |action: PanelAction| {
            let (_, outcome) = (*panel).transition(action);
            panel.dispatch(action);
            if let Some(state) = outcome.report {
                console::debug!("article settings reported", state.style_attribute());
                on_apply.emit(state);
            }
            if let (Some(open), Some(sink)) = (outcome.open_changed, on_open_change.as_ref()) {
                sink.emit(open);
            }
        })
    };

    use_outside_click_close(
        panel.is_open,
        root_ref.clone(),
        {
            let panel = panel.clone();
            Callback::from(move |()| panel.dispatch(PanelAction::OutsidePointer))
        },
        props.on_open_change.clone(),
    );

    let on_toggle = run.reform(|_: MouseEvent| PanelAction::Toggle);
    let on_apply = run.reform(|event: MouseEvent| {
        event.prevent_default();
        PanelAction::Apply
    });
    let on_reset = run.reform(|event: MouseEvent| {
        event.prevent_default();
        PanelAction::Reset
    });
    let on_field = |field: ArticleField| {
        run.reform(move |value: OptionType| PanelAction::Update(field.update(value)))
    };
    let draft = panel.draft;

    html! {
        <div class="article-params" ref={root_ref}>
            <ArrowButton
                is_open={panel.is_open}
                label={t("panel.toggle", "Open or close the article settings")}
                onclick={on_toggle}
            />
            <aside
                class={classes!(
                    "article-params__container",
                    panel.is_open.then_some("article-params__container_open")
                )}
                aria-hidden={(!panel.is_open).to_string()}
            >
                <form class="article-params__form">
                    <Text tag="h2" size={31} weight={800} uppercase={true}>
                        {t("panel.title", "Set parameters")}
                    </Text>
                    <Select
                        title={t("panel.font_family", "Font")}
                        placeholder={t("panel.font_family_placeholder", "Choose a font")}
                        options={ArticleField::FontFamily.options()}
                        selected={Some(draft.font_family)}
                        onchange={on_field(ArticleField::FontFamily)}
                    />
                    <RadioGroup
                        field={ArticleField::FontSize}
                        title={t("panel.font_size", "Font size")}
                        options={ArticleField::FontSize.options()}
                        selected={draft.font_size}
                        onchange={on_field(ArticleField::FontSize)}
                    />
                    <Select
                        title={t("panel.font_color", "Font color")}
                        placeholder={t("panel.font_color_placeholder", "Choose a font color")}
                        options={ArticleField::FontColor.options()}
                        selected={Some(draft.font_color)}
                        onchange={on_field(ArticleField::FontColor)}
                    />
                    <Separator />
                    <Select
                        title={t("panel.background_color", "Background color")}
                        placeholder={t("panel.background_color_placeholder", "Choose a background color")}
                        options={ArticleField::BackgroundColor.options()}
                        selected={Some(draft.background_color)}
                        onchange={on_field(ArticleField::BackgroundColor)}
                    />
                    <Select
                        title={t("panel.content_width", "Content width")}
                        placeholder={t("panel.content_width_placeholder", "Choose a content width")}
                        options={ArticleField::ContentWidth.options()}
                        selected={Some(draft.content_width)}
                        onchange={on_field(ArticleField::ContentWidth)}
                    />
                    <div class="article-params__bottom">
                        <Button
                            title={t("panel.reset", "Reset")}
                            kind={ButtonKind::Clear}
                            html_type="reset"
                            onclick={on_reset}
                        />
                        <Button
                            title={t("panel.apply", "Apply")}
                            kind={ButtonKind::Apply}
                            html_type="submit"
                            onclick={on_apply}
                        />
                    </div>
                </form>
            </aside>
        </div>
    }
}
