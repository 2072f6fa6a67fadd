//! Wraparound paging for horizontally scrolling strips.
//!
//! Same guarantee as the indexed carousel, in continuous scroll coordinates.
//! Scroll offsets reported by the browser are rarely exact, so "at the edge"
//! means "within `tolerance` of it".

use super::carousel::Direction;

/// Snapshot of a scroll container along its horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// `scrollLeft`
    pub offset: f64,
    /// `clientWidth`
    pub viewport: f64,
    /// `scrollWidth`
    pub extent: f64,
}

impl ScrollMetrics {
    pub fn max_offset(&self) -> f64 {
        (self.extent - self.viewport).max(0.0)
    }

    fn at_end(&self, tolerance: f64) -> bool {
        self.offset + self.viewport >= self.extent - tolerance
    }

    fn at_start(&self, tolerance: f64) -> bool {
        self.offset <= tolerance
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    /// Share of the viewport moved per step.
    pub fraction: f64,
    pub tolerance: f64,
}

impl ScrollStep {
    /// Gallery strip paging.
    pub const GALLERY: ScrollStep = ScrollStep {
        fraction: 0.75,
        tolerance: 50.0,
    };

    /// Services strip paging.
    pub const SERVICES: ScrollStep = ScrollStep {
        fraction: 0.8,
        tolerance: 10.0,
    };
}

/// Scroll offset to move to for one step in `direction`.
pub fn scroll_target(metrics: ScrollMetrics, direction: Direction, step: ScrollStep) -> f64 {
    let amount = metrics.viewport * step.fraction;
    match direction {
        Direction::Next if metrics.at_end(step.tolerance) => 0.0,
        Direction::Next => (metrics.offset + amount).min(metrics.max_offset()),
        Direction::Previous if metrics.at_start(step.tolerance) => metrics.max_offset(),
        Direction::Previous => (metrics.offset - amount).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            viewport: 300.0,
            extent: 1000.0,
        }
    }

    #[test]
    fn next_near_end_wraps_to_start() {
        let target = scroll_target(metrics(950.0), Direction::Next, ScrollStep::GALLERY);
        assert_eq!(target, 0.0);
    }

    #[test]
    fn next_within_tolerance_of_end_wraps() {
        // 660 + 300 = 960, inside the 50 unit band before 1000
        let target = scroll_target(metrics(660.0), Direction::Next, ScrollStep::GALLERY);
        assert_eq!(target, 0.0);

        let target = scroll_target(metrics(660.0), Direction::Next, ScrollStep::SERVICES);
        assert_eq!(target, 700.0);
    }

    #[test]
    fn next_moves_by_step() {
        let target = scroll_target(metrics(100.0), Direction::Next, ScrollStep::GALLERY);
        assert_eq!(target, 325.0);
    }

    #[test]
    fn next_never_overshoots_max_offset() {
        let target = scroll_target(metrics(500.0), Direction::Next, ScrollStep::GALLERY);
        assert_eq!(target, 700.0);
    }

    #[test]
    fn previous_at_start_wraps_to_end() {
        let target = scroll_target(metrics(0.0), Direction::Previous, ScrollStep::GALLERY);
        assert_eq!(target, 700.0);

        let target = scroll_target(metrics(40.0), Direction::Previous, ScrollStep::GALLERY);
        assert_eq!(target, 700.0);
    }

    #[test]
    fn previous_moves_back_by_step() {
        let target = scroll_target(metrics(600.0), Direction::Previous, ScrollStep::SERVICES);
        assert_eq!(target, 360.0);

        let target = scroll_target(metrics(100.0), Direction::Previous, ScrollStep::SERVICES);
        assert_eq!(target, 0.0);
    }

    #[test]
    fn content_narrower_than_viewport_stays_at_zero() {
        let narrow = ScrollMetrics {
            offset: 0.0,
            viewport: 800.0,
            extent: 600.0,
        };
        assert_eq!(scroll_target(narrow, Direction::Next, ScrollStep::GALLERY), 0.0);
        assert_eq!(scroll_target(narrow, Direction::Previous, ScrollStep::GALLERY), 0.0);
    }
}
