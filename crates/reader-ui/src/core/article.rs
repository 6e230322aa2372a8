//! Article presentation state and its field-level reducer.
//!
//! # Design
//! - One typed update per field so a change can only ever touch its own slot.
//! - The default combination is a `const` shared by mount and reset.
//! - The owner consumes the state as CSS custom properties.

use crate::core::options::{
    BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
    OptionType,
};

/// Names of the five presentation fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArticleField {
    /// Body font family.
    FontFamily,
    /// Body font size.
    FontSize,
    /// Body text color.
    FontColor,
    /// Page background color.
    BackgroundColor,
    /// Article column width.
    ContentWidth,
}

impl ArticleField {
    /// All fields in panel order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::FontFamily,
            Self::FontSize,
            Self::FontColor,
            Self::BackgroundColor,
            Self::ContentWidth,
        ]
    }

    /// Machine name, also used as the form control name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontColor => "font_color",
            Self::BackgroundColor => "background_color",
            Self::ContentWidth => "content_width",
        }
    }

    /// Catalog bound to the field.
    #[must_use]
    pub fn options(self) -> &'static [OptionType] {
        match self {
            Self::FontFamily => &FONT_FAMILY_OPTIONS,
            Self::FontSize => &FONT_SIZE_OPTIONS,
            Self::FontColor => &FONT_COLORS,
            Self::BackgroundColor => &BACKGROUND_COLORS,
            Self::ContentWidth => &CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Wrap `value` in the update that targets this field.
    #[must_use]
    pub const fn update(self, value: OptionType) -> FieldUpdate {
        match self {
            Self::FontFamily => FieldUpdate::SetFontFamily(value),
            Self::FontSize => FieldUpdate::SetFontSize(value),
            Self::FontColor => FieldUpdate::SetFontColor(value),
            Self::BackgroundColor => FieldUpdate::SetBackgroundColor(value),
            Self::ContentWidth => FieldUpdate::SetContentWidth(value),
        }
    }
}

/// Full presentation selection for the article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArticleState {
    /// Selected font family.
    pub font_family: OptionType,
    /// Selected font size.
    pub font_size: OptionType,
    /// Selected text color.
    pub font_color: OptionType,
    /// Selected background color.
    pub background_color: OptionType,
    /// Selected column width.
    pub content_width: OptionType,
}

/// Initial draft and reset target.
pub const DEFAULT_ARTICLE_STATE: ArticleState = ArticleState {
    font_family: FONT_FAMILY_OPTIONS[0],
    font_size: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLORS[0],
    background_color: BACKGROUND_COLORS[0],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};

impl Default for ArticleState {
    fn default() -> Self {
        DEFAULT_ARTICLE_STATE
    }
}

/// Single-field replacement emitted by a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Replace the font family.
    SetFontFamily(OptionType),
    /// Replace the font size.
    SetFontSize(OptionType),
    /// Replace the text color.
    SetFontColor(OptionType),
    /// Replace the background color.
    SetBackgroundColor(OptionType),
    /// Replace the column width.
    SetContentWidth(OptionType),
}

impl FieldUpdate {
    /// Field targeted by the update.
    #[must_use]
    pub const fn field(self) -> ArticleField {
        match self {
            Self::SetFontFamily(_) => ArticleField::FontFamily,
            Self::SetFontSize(_) => ArticleField::FontSize,
            Self::SetFontColor(_) => ArticleField::FontColor,
            Self::SetBackgroundColor(_) => ArticleField::BackgroundColor,
            Self::SetContentWidth(_) => ArticleField::ContentWidth,
        }
    }
}

impl ArticleState {
    /// Current value of `field`.
    #[must_use]
    pub const fn get(&self, field: ArticleField) -> OptionType {
        match field {
            ArticleField::FontFamily => self.font_family,
            ArticleField::FontSize => self.font_size,
            ArticleField::FontColor => self.font_color,
            ArticleField::BackgroundColor => self.background_color,
            ArticleField::ContentWidth => self.content_width,
        }
    }

    /// Return a copy with exactly one field replaced.
    #[must_use]
    pub const fn with_update(mut self, update: FieldUpdate) -> Self {
        match update {
            FieldUpdate::SetFontFamily(value) => self.font_family = value,
            FieldUpdate::SetFontSize(value) => self.font_size = value,
            FieldUpdate::SetFontColor(value) => self.font_color = value,
            FieldUpdate::SetBackgroundColor(value) => self.background_color = value,
            FieldUpdate::SetContentWidth(value) => self.content_width = value,
        }
        self
    }

    /// Whether every field holds an entry of its own catalog.
    ///
    /// Entries are matched on every attribute, so a background color never
    /// passes as a font color even though both share the hex value.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        ArticleField::all().into_iter().all(|field| {
            let current = self.get(field);
            field
                .options()
                .iter()
                .any(|option| option.is_same_entry(&current))
        })
    }

    /// CSS custom properties consumed by the article stylesheet.
    #[must_use]
    pub const fn css_variables(&self) -> [(&'static str, &'static str); 5] {
        [
            ("--font-family", self.font_family.value),
            ("--font-size", self.font_size.value),
            ("--font-color", self.font_color.value),
            ("--container-width", self.content_width.value),
            ("--bg-color", self.background_color.value),
        ]
    }

    /// Inline `style` attribute for the article root.
    #[must_use]
    pub fn style_attribute(&self) -> String {
        self.css_variables()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_first_entries() {
        let state = ArticleState::default();
        assert_eq!(state.font_family.title, "Open Sans");
        assert_eq!(state.font_size.value, "18px");
        assert_eq!(state.font_color.value, "#000000");
        assert_eq!(state.background_color.value, "#FFFFFF");
        assert_eq!(state.content_width.value, "1394px");
        assert!(state.is_consistent());
    }

    #[test]
    fn every_update_touches_only_its_field() {
        let base = ArticleState::default();
        for field in ArticleField::all() {
            for value in field.options() {
                let next = base.with_update(field.update(*value));
                assert_eq!(next.get(field), *value);
                for other in ArticleField::all().into_iter().filter(|f| *f != field) {
                    assert_eq!(next.get(other), base.get(other), "{field:?} leaked into {other:?}");
                }
                assert!(next.is_consistent());
            }
        }
    }

    #[test]
    fn update_reports_its_target_field() {
        for field in ArticleField::all() {
            assert_eq!(field.update(field.options()[0]).field(), field);
        }
    }

    #[test]
    fn foreign_values_break_consistency() {
        let state = ArticleState::default().with_update(FieldUpdate::SetFontSize(FONT_COLORS[3]));
        assert!(!state.is_consistent());
    }

    #[test]
    fn borrowed_entry_with_matching_value_is_inconsistent() {
        let state = ArticleState::default()
            .with_update(FieldUpdate::SetFontColor(BACKGROUND_COLORS[0]));
        assert_eq!(state.font_color.value, FONT_COLORS[1].value);
        assert!(!state.is_consistent());
        let state = state.with_update(FieldUpdate::SetFontColor(FONT_COLORS[1]));
        assert!(state.is_consistent());
    }

    #[test]
    fn style_attribute_lists_custom_properties() {
        let state = ArticleState::default()
            .with_update(FieldUpdate::SetContentWidth(CONTENT_WIDTH_OPTIONS[1]));
        assert_eq!(
            state.style_attribute(),
            "--font-family: Open Sans; --font-size: 18px; --font-color: #000000; \
             --container-width: 948px; --bg-color: #FFFFFF;"
        );
    }

    #[test]
    fn field_names_are_stable() {
        let names: Vec<_> = ArticleField::all().iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            ["font_family", "font_size", "font_color", "background_color", "content_width"]
        );
    }
}
