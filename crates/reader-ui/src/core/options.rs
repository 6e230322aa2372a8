//! Closed option catalogs for the article presentation controls.
//!
//! # Design
//! - Every catalog is a `const` array defined once and never mutated.
//! - Options compare by machine value so lookups stay independent of labels.
//! - Controls resolve DOM strings back into options here and nowhere else.

use std::hash::{Hash, Hasher};

use crate::core::article::ArticleField;
use crate::core::error::{OptionError, OptionResult};

/// One selectable, labeled value within a fixed catalog.
#[derive(Clone, Copy, Debug)]
pub struct OptionType {
    /// Stable key used to look up translated labels (`option.<id>`).
    pub id: &'static str,
    /// English display label.
    pub title: &'static str,
    /// Machine value (a CSS literal).
    pub value: &'static str,
    /// CSS class applied when the option is rendered.
    pub class_name: &'static str,
    /// Optional swatch class for the option row in a dropdown.
    pub option_class_name: Option<&'static str>,
}

impl OptionType {
    const fn plain(
        id: &'static str,
        title: &'static str,
        value: &'static str,
        class_name: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            value,
            class_name,
            option_class_name: None,
        }
    }

    const fn swatch(
        id: &'static str,
        title: &'static str,
        value: &'static str,
        class_name: &'static str,
        option_class_name: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            value,
            class_name,
            option_class_name: Some(option_class_name),
        }
    }

    /// Whether `other` is this exact catalog entry, not merely the same value.
    #[must_use]
    pub fn is_same_entry(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.value == other.value
            && self.class_name == other.class_name
            && self.option_class_name == other.option_class_name
    }

    /// Translation key for the option label.
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("option.{}", self.id)
    }
}

impl PartialEq for OptionType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for OptionType {}

impl Hash for OptionType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Font families offered by the reader.
pub const FONT_FAMILY_OPTIONS: [OptionType; 5] = [
    OptionType::plain("open_sans", "Open Sans", "Open Sans", "open-sans"),
    OptionType::plain("ubuntu", "Ubuntu", "Ubuntu", "ubuntu"),
    OptionType::plain(
        "cormorant_garamond",
        "Cormorant Garamond",
        "Cormorant Garamond",
        "cormorant-garamond",
    ),
    OptionType::plain("days_one", "Days One", "Days One", "days-one"),
    OptionType::plain("merriweather", "Merriweather", "Merriweather", "merriweather"),
];

/// Body text sizes.
pub const FONT_SIZE_OPTIONS: [OptionType; 3] = [
    OptionType::plain("size_18", "18px", "18px", "font-size-18"),
    OptionType::plain("size_25", "25px", "25px", "font-size-25"),
    OptionType::plain("size_38", "38px", "38px", "font-size-38"),
];

/// Text colors.
pub const FONT_COLORS: [OptionType; 9] = [
    OptionType::swatch("black", "Black", "#000000", "font-black", "option-black"),
    OptionType::swatch("white", "White", "#FFFFFF", "font-white", "option-white"),
    OptionType::swatch("gray", "Gray", "#C4C4C4", "font-gray", "option-gray"),
    OptionType::swatch("pink", "Pink", "#FEAFE8", "font-pink", "option-pink"),
    OptionType::swatch("fuchsia", "Fuchsia", "#FD24AF", "font-fuchsia", "option-fuchsia"),
    OptionType::swatch("yellow", "Yellow", "#FFC802", "font-yellow", "option-yellow"),
    OptionType::swatch("green", "Green", "#80D994", "font-green", "option-green"),
    OptionType::swatch("blue", "Blue", "#6FC1FD", "font-blue", "option-blue"),
    OptionType::swatch("purple", "Purple", "#5F3BBF", "font-purple", "option-purple"),
];

/// Page background colors.
pub const BACKGROUND_COLORS: [OptionType; 9] = [
    OptionType::swatch("white", "White", "#FFFFFF", "bg-white", "option-white"),
    OptionType::swatch("black", "Black", "#000000", "bg-black", "option-black"),
    OptionType::swatch("gray", "Gray", "#C4C4C4", "bg-gray", "option-gray"),
    OptionType::swatch("pink", "Pink", "#FEAFE8", "bg-pink", "option-pink"),
    OptionType::swatch("fuchsia", "Fuchsia", "#FD24AF", "bg-fuchsia", "option-fuchsia"),
    OptionType::swatch("yellow", "Yellow", "#FFC802", "bg-yellow", "option-yellow"),
    OptionType::swatch("green", "Green", "#80D994", "bg-green", "option-green"),
    OptionType::swatch("blue", "Blue", "#6FC1FD", "bg-blue", "option-blue"),
    OptionType::swatch("purple", "Purple", "#5F3BBF", "bg-purple", "option-purple"),
];

/// Article column widths.
pub const CONTENT_WIDTH_OPTIONS: [OptionType; 2] = [
    OptionType::swatch("wide", "Wide", "1394px", "width-wide", "option-wide"),
    OptionType::swatch("narrow", "Narrow", "948px", "width-narrow", "option-narrow"),
];

/// Find the option whose machine value matches `value`.
///
/// # Errors
///
/// Returns [`OptionError::UnknownValue`] when `value` is not part of `options`.
pub fn find_by_value(
    field: ArticleField,
    options: &[OptionType],
    value: &str,
) -> OptionResult<OptionType> {
    options
        .iter()
        .find(|option| option.value == value)
        .copied()
        .ok_or_else(|| OptionError::UnknownValue {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn catalogs() -> [(&'static str, &'static [OptionType]); 5] {
        [
            ("font family", &FONT_FAMILY_OPTIONS),
            ("font size", &FONT_SIZE_OPTIONS),
            ("font color", &FONT_COLORS),
            ("background", &BACKGROUND_COLORS),
            ("content width", &CONTENT_WIDTH_OPTIONS),
        ]
    }

    #[test]
    fn values_and_ids_are_unique_per_catalog() {
        for (name, options) in catalogs() {
            let values: HashSet<_> = options.iter().map(|o| o.value).collect();
            let ids: HashSet<_> = options.iter().map(|o| o.id).collect();
            assert_eq!(values.len(), options.len(), "duplicate value in {name}");
            assert_eq!(ids.len(), options.len(), "duplicate id in {name}");
        }
    }

    #[test]
    fn equality_ignores_labels() {
        let relabeled = OptionType {
            title: "Renamed",
            ..FONT_SIZE_OPTIONS[1]
        };
        assert_eq!(relabeled, FONT_SIZE_OPTIONS[1]);
        assert_ne!(FONT_SIZE_OPTIONS[0], FONT_SIZE_OPTIONS[1]);
    }

    #[test]
    fn same_value_in_another_catalog_is_a_different_entry() {
        assert_eq!(FONT_COLORS[1], BACKGROUND_COLORS[0]);
        assert!(!FONT_COLORS[1].is_same_entry(&BACKGROUND_COLORS[0]));
        assert!(FONT_COLORS[1].is_same_entry(&FONT_COLORS[1]));
    }

    #[test]
    fn find_by_value_resolves_members() {
        let found = find_by_value(ArticleField::FontSize, &FONT_SIZE_OPTIONS, "38px");
        assert_eq!(found.ok(), Some(FONT_SIZE_OPTIONS[2]));
    }

    #[test]
    fn find_by_value_rejects_strangers() {
        let err = find_by_value(ArticleField::ContentWidth, &CONTENT_WIDTH_OPTIONS, "12px")
            .expect_err("value outside the catalog");
        let OptionError::UnknownValue { field, value } = err;
        assert_eq!(field, ArticleField::ContentWidth);
        assert_eq!(value, "12px");
    }

    #[test]
    fn every_option_class_is_styled() {
        let stylesheet = include_str!("../../static/reader.css");
        for (name, options) in catalogs() {
            for option in options {
                let classes = std::iter::once(option.class_name).chain(option.option_class_name);
                for class in classes {
                    assert!(
                        stylesheet.contains(&format!(".{class} {{")),
                        "{name}: no rule for `{class}`"
                    );
                }
            }
        }
    }

    #[test]
    fn label_keys_are_namespaced() {
        assert_eq!(FONT_COLORS[4].label_key(), "option.fuchsia");
    }
}
