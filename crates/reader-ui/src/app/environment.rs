//! Browser environment lookups for the reader shell.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::utils::window;

pub(crate) fn load_locale() -> LocaleCode {
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
        console::debug!("unsupported browser locale, using default", nav);
    }
    DEFAULT_LOCALE
}
