//! Reusable hooks shared by collapsible components.

use crate::core::outside::{PointerTarget, closes_on_pointer};
use gloo::events::EventListener;
use gloo::utils::window;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

/// Close a surface when a pointer-down lands outside `root`.
///
/// The window listener exists only while `is_open` is true. It is dropped
/// when the flag flips back or the owning component unmounts.
#[hook]
pub(crate) fn use_outside_click_close(
    is_open: bool,
    root: NodeRef,
    on_close: Callback<()>,
    on_change: Option<Callback<bool>>,
) {
    use_effect_with_deps(
        move |is_open| {
            let open = *is_open;
            let listener = open.then(|| {
                EventListener::new(&window(), "pointerdown", move |event| {
                    let target = event
                        .target()
                        .and_then(|target| target.dyn_into::<Node>().ok());
                    let contained = root
                        .cast::<Node>()
                        .map(|region| region.contains(target.as_ref()));
                    let kind = PointerTarget::classify(target.is_some(), contained);
                    if closes_on_pointer(open, kind) {
                        on_close.emit(());
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.emit(false);
                        }
                    }
                })
            });
            move || drop(listener)
        },
        is_open,
    );
}
