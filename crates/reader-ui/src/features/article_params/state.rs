//! Settings panel state: open flag plus the draft presentation.
//!
//! # Design
//! - Every interaction is a [`PanelAction`] folded by one transition function.
//! - Transitions return the owner-facing notifications instead of emitting them,
//!   so the view decides when callbacks fire and tests can assert on them.
//! - Apply never closes the panel; only toggles and outside pointers do.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::core::article::{ArticleState, DEFAULT_ARTICLE_STATE, FieldUpdate};

/// Panel interaction state scoped to the mounted component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanelState {
    /// Whether the panel body is expanded.
    pub is_open: bool,
    /// Selection that has not been applied yet.
    pub draft: ArticleState,
}

/// User intents handled by the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Flip the open flag.
    Toggle,
    /// A pointer-down landed outside the panel region.
    OutsidePointer,
    /// Replace one draft field.
    Update(FieldUpdate),
    /// Report the draft to the owner.
    Apply,
    /// Restore the default draft and report it.
    Reset,
}

/// Notifications produced by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanelOutcome {
    /// State to hand to the owner's apply callback.
    pub report: Option<ArticleState>,
    /// New open flag when it changed.
    pub open_changed: Option<bool>,
}

impl PanelState {
    /// Fold `action` into the state.
    #[must_use]
    pub const fn transition(self, action: PanelAction) -> (Self, PanelOutcome) {
        let mut next = self;
        let mut outcome = PanelOutcome {
            report: None,
            open_changed: None,
        };
        match action {
            PanelAction::Toggle => {
                next.is_open = !self.is_open;
                outcome.open_changed = Some(next.is_open);
            }
            PanelAction::OutsidePointer => {
                if self.is_open {
                    next.is_open = false;
                    outcome.open_changed = Some(false);
                }
            }
            PanelAction::Update(update) => {
                next.draft = self.draft.with_update(update);
            }
            PanelAction::Apply => {
                outcome.report = Some(self.draft);
            }
            PanelAction::Reset => {
                next.draft = DEFAULT_ARTICLE_STATE;
                outcome.report = Some(DEFAULT_ARTICLE_STATE);
            }
        }
        (next, outcome)
    }
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (next, _) = self.transition(action);
        if next == *self { self } else { Rc::new(next) }
    }
}
