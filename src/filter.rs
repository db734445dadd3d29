//! Portfolio grid filtering: which items a filter keeps visible, where the
//! rest go, and the inline styles that drive the hide/reveal animation.

/// Filter value that matches every category.
pub const ALL: &str = "all";

/// Length of the hide phase before the filtered set is revealed.
pub const HIDE_MS: u32 = 300;

/// Per-item delay while revealing the filtered set.
pub const STAGGER_MS: u32 = 100;

/// Flex order for non-matching items, pushing them past every visible one.
pub const ORDER_END: u32 = 999;

pub fn matches(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}

/// Inline style for a grid item. During the hide phase every item fades and
/// shrinks; afterwards matching items stand upright at order 0 with a
/// staggered transition delay and the rest stay collapsed at the end of the
/// grid.
pub fn item_style(filter: &str, category: &str, index: usize, hiding: bool) -> String {
    if hiding {
        return "opacity: 0; transform: scale(0.8) translateY(20px); transition: all 0.3s ease;"
            .to_string();
    }

    if matches(filter, category) {
        format!(
            "opacity: 1; transform: scale(1) translateY(0); transition: all 0.3s ease; \
             transition-delay: {}ms; order: 0;",
            stagger_delay_ms(index)
        )
    } else {
        format!(
            "opacity: 0; transform: scale(0.8) translateY(20px); transition: all 0.3s ease; \
             order: {ORDER_END};"
        )
    }
}

/// Whether an item carries the `hidden` marker class under a filter. During
/// the hide phase the previous filter is still the applied one, so markers
/// only move once the new filter lands.
pub fn item_hidden(filter: &str, category: &str) -> bool {
    !matches(filter, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_category() {
        for category in ["web", "app", "design", ""] {
            assert!(matches(ALL, category));
            assert!(!item_hidden(ALL, category));
            let style = item_style(ALL, category, 0, false);
            assert!(style.contains("opacity: 1"));
            assert!(style.contains("order: 0"));
        }
    }

    #[test]
    fn specific_filter_keeps_only_its_category() {
        assert!(matches("web", "web"));
        assert!(!matches("web", "app"));
        assert!(!matches("web", "Web"));
    }

    #[test]
    fn non_matching_items_collapse_to_the_end() {
        assert!(item_hidden("web", "app"));
        let style = item_style("web", "app", 2, false);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("order: 999"));
    }

    #[test]
    fn hide_phase_conceals_matching_items_too() {
        let style = item_style("web", "web", 0, true);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("scale(0.8) translateY(20px)"));
    }

    #[test]
    fn reveal_is_staggered_per_item() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(5), 500);
        assert!(item_style(ALL, "web", 3, false).contains("transition-delay: 300ms"));
    }
}
