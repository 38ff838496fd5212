//! Display hints derived from the scored windows.

use super::ads::{GOOD_THRESHOLD, MODERATE_THRESHOLD};
use crate::models::{ScoredWindow, UiDirectives};

/// Below this best score nothing is worth showing.
pub const GRID_MIN_SCORE: u8 = 20;
/// Number of windows highlighted when at least one scores `good` or better.
pub const TOP_HIGHLIGHTS: u8 = 3;
/// Largest number of `moderate` windows that still gets a single highlight.
const MAX_MODERATE_FOR_SINGLE_HIGHLIGHT: usize = 3;

/// Decide what the forecast view should show.
///
/// Rules, top-down:
/// - best score < 20: hide everything
/// - any window >= 50: grid, top 3 highlighted
/// - 1 to 3 windows >= 30: grid, single highlight
/// - otherwise: grid without highlights
///
/// The banner is shown exactly when the best score is at least 30.
pub fn generate_ui_directives(windows: &[ScoredWindow]) -> UiDirectives {
    let max_ads = windows.iter().map(|w| w.ads).max().unwrap_or(0);

    if max_ads < GRID_MIN_SCORE {
        return UiDirectives::default();
    }

    let show_best_banner = max_ads >= MODERATE_THRESHOLD;
    let viable = windows.iter().filter(|w| w.ads >= MODERATE_THRESHOLD).count();

    let highlight_top = if windows.iter().any(|w| w.ads >= GOOD_THRESHOLD) {
        TOP_HIGHLIGHTS
    } else if (1..=MAX_MODERATE_FOR_SINGLE_HIGHLIGHT).contains(&viable) {
        1
    } else {
        0
    };

    UiDirectives {
        show_48_grid: true,
        highlight_top,
        show_best_banner,
    }
}
