//! Scroll-linked math: nav threshold, anchor offsets, scroll progress,
//! parallax transforms, and the cursor-trail easing step.

/// Scroll depth past which the nav background and progress bar switch on.
pub const SCROLL_THRESHOLD: f64 = 70.0;

/// Fixed header height compensated when scrolling to an anchor.
pub const NAV_OFFSET: f64 = 70.0;

/// Fraction of the remaining distance the cursor trail covers per frame.
pub const TRAIL_EASE: f64 = 0.1;

/// Strict threshold: exactly 70 px keeps the resting style.
pub fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Scroll target for an in-page anchor, compensating the fixed header.
pub fn anchor_top(target_offset_top: f64) -> f64 {
    target_offset_top - NAV_OFFSET
}

/// Scroll progress as a percentage of the total scrollable height.
/// A page with nothing to scroll reports 0.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Index-scaled parallax speed shared by the hero cards and the background
/// shapes: 0.5 for the first element, +0.1 per element after it.
fn parallax_speed(index: usize) -> f64 {
    0.5 + index as f64 * 0.1
}

/// Transform for a hero floating card at the given scroll depth.
pub fn card_transform(scroll_y: f64, index: usize) -> String {
    // Negating a zero scroll yields -0.0, which would render as "-0px".
    let y = -(scroll_y * parallax_speed(index)) + 0.0;
    format!("transform: translateY({y}px);")
}

/// Transform for a decorative background shape: a damped version of the card
/// offset plus a slow rotation.
pub fn shape_transform(scroll_y: f64, index: usize) -> String {
    let y = -(scroll_y * parallax_speed(index) * 0.3) + 0.0;
    let rotate = scroll_y * 0.1;
    format!("transform: translateY({y}px) rotate({rotate}deg);")
}

/// One easing step of the cursor trail toward the pointer.
pub fn trail_step(current: f64, target: f64) -> f64 {
    current + (target - current) * TRAIL_EASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!past_threshold(70.0));
        assert!(past_threshold(70.1));
        assert!(!past_threshold(0.0));
        assert!(past_threshold(500.0));
    }

    #[test]
    fn anchor_compensates_the_fixed_header() {
        assert_eq!(anchor_top(470.0), 400.0);
        assert_eq!(anchor_top(0.0), -70.0);
    }

    #[test]
    fn progress_spans_zero_to_one_hundred() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_handles_unscrollable_pages() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_clamped_against_overscroll() {
        assert_eq!(progress_percent(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(-20.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn cards_speed_up_with_their_index() {
        assert_eq!(card_transform(100.0, 0), "transform: translateY(-50px);");
        assert_eq!(card_transform(100.0, 2), "transform: translateY(-70px);");
        assert_eq!(card_transform(0.0, 5), "transform: translateY(0px);");
    }

    #[test]
    fn zero_scroll_renders_an_unsigned_zero_offset() {
        for index in 0..4 {
            assert_eq!(card_transform(0.0, index), "transform: translateY(0px);");
            assert_eq!(
                shape_transform(0.0, index),
                "transform: translateY(0px) rotate(0deg);"
            );
        }
    }

    #[test]
    fn shapes_drift_slower_and_rotate() {
        assert_eq!(
            shape_transform(100.0, 0),
            "transform: translateY(-15px) rotate(10deg);"
        );
        assert_eq!(
            shape_transform(200.0, 1),
            "transform: translateY(-36px) rotate(20deg);"
        );
    }

    #[test]
    fn trail_converges_on_the_pointer() {
        let mut position = 0.0;
        for _ in 0..120 {
            position = trail_step(position, 200.0);
        }
        assert!((position - 200.0).abs() < 0.01);
        // A single step covers a tenth of the distance.
        assert_eq!(trail_step(0.0, 100.0), 10.0);
    }
}
