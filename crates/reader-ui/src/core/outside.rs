//! Outside-interaction decisions for collapsible surfaces.
//!
//! # Design
//! - The DOM hook only classifies the pointer target; the decision lives here.
//! - A region that is not mounted counts as "outside" so a stale open flag still closes.

/// Where a pointer-down landed relative to a watched region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The target node is the region or one of its descendants.
    Inside,
    /// The target node lies outside the region (or the region is not mounted).
    Outside,
    /// The event target is not a DOM node (e.g. the window itself).
    Detached,
}

impl PointerTarget {
    /// Classify a target from DOM containment facts.
    ///
    /// `contained` is `None` when the watched region is not mounted.
    #[must_use]
    pub const fn classify(is_node: bool, contained: Option<bool>) -> Self {
        match (is_node, contained) {
            (false, _) => Self::Detached,
            (true, Some(true)) => Self::Inside,
            (true, Some(false) | None) => Self::Outside,
        }
    }
}

/// Whether a pointer-down should close a surface that is currently `is_open`.
///
/// Only an open surface hit outside its region closes. Inside and detached
/// targets are ignored.
#[must_use]
pub const fn closes_on_pointer(is_open: bool, target: PointerTarget) -> bool {
    is_open && matches!(target, PointerTarget::Outside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_pointer_closes_open_surface() {
        assert!(closes_on_pointer(true, PointerTarget::Outside));
    }

    #[test]
    fn closed_surface_ignores_everything() {
        for target in [
            PointerTarget::Inside,
            PointerTarget::Outside,
            PointerTarget::Detached,
        ] {
            assert!(!closes_on_pointer(false, target));
        }
    }

    #[test]
    fn inside_and_detached_targets_keep_surface_open() {
        assert!(!closes_on_pointer(true, PointerTarget::Inside));
        assert!(!closes_on_pointer(true, PointerTarget::Detached));
    }

    #[test]
    fn classification_treats_unmounted_region_as_outside() {
        assert_eq!(PointerTarget::classify(true, None), PointerTarget::Outside);
        assert_eq!(PointerTarget::classify(true, Some(false)), PointerTarget::Outside);
        assert_eq!(PointerTarget::classify(true, Some(true)), PointerTarget::Inside);
        assert_eq!(PointerTarget::classify(false, Some(true)), PointerTarget::Detached);
    }
}
