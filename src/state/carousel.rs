use std::num::NonZeroUsize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// What the rendering layer needs to draw the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselView {
    pub index: usize,
    pub transitioning: bool,
}

/// Index and transition guard of a carousel over a fixed, non-empty item list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: NonZeroUsize,
    index: usize,
    transitioning: bool,
}

impl CarouselState {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            index: 0,
            transitioning: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.index,
            transitioning: self.transitioning,
        }
    }

    /// Moves one step with wraparound and raises the transition guard.
    ///
    /// Returns `false` without touching anything while a transition is
    /// already in flight; the caller must not schedule a settle in that case.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.transitioning {
            return false;
        }
        let len = self.len.get();
        self.index = match direction {
            Direction::Next => (self.index + 1) % len,
            Direction::Previous => (self.index + len - 1) % len,
        };
        self.transitioning = true;
        true
    }

    /// Direct selection. Ignores the guard and leaves it as it is.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len.get() {
            return false;
        }
        self.index = index;
        true
    }

    pub fn finish_transition(&mut self) {
        self.transitioning = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state(len: usize) -> CarouselState {
        CarouselState::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn starts_at_first_item_idle() {
        let carousel = state(3);
        assert_eq!(carousel.view(), CarouselView { index: 0, transitioning: false });
    }

    #[test]
    fn five_items_wrap_after_last() {
        let mut carousel = state(5);
        let mut seen = Vec::new();
        for _ in 0..5 {
            assert!(carousel.advance(Direction::Next));
            seen.push(carousel.index());
            carousel.finish_transition();
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn previous_from_first_goes_to_last() {
        let mut carousel = state(4);
        assert!(carousel.advance(Direction::Previous));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn single_item_stays_put() {
        let mut carousel = state(1);
        carousel.advance(Direction::Next);
        carousel.finish_transition();
        carousel.advance(Direction::Previous);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn advance_is_ignored_mid_transition() {
        let mut carousel = state(5);
        assert!(carousel.advance(Direction::Next));
        let before = carousel.clone();

        assert!(!carousel.advance(Direction::Next));
        assert!(!carousel.advance(Direction::Previous));
        assert_eq!(carousel, before);
        assert!(carousel.view().transitioning);
    }

    #[test]
    fn jump_bypasses_guard_without_raising_it() {
        let mut carousel = state(5);
        assert!(carousel.jump_to(3));
        assert_eq!(carousel.view(), CarouselView { index: 3, transitioning: false });

        carousel.advance(Direction::Next);
        assert!(carousel.jump_to(1));
        assert_eq!(carousel.view(), CarouselView { index: 1, transitioning: true });
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut carousel = state(2);
        assert!(!carousel.jump_to(2));
        assert_eq!(carousel.index(), 0);
    }

    proptest! {
        #[test]
        fn k_nexts_land_on_k_mod_n(len in 1usize..40, k in 0usize..200) {
            let mut carousel = state(len);
            for _ in 0..k {
                prop_assert!(carousel.advance(Direction::Next));
                carousel.finish_transition();
            }
            prop_assert_eq!(carousel.index(), k % len);
        }

        #[test]
        fn next_then_previous_is_identity(len in 1usize..40, start in 0usize..40) {
            let start = start % len;
            let mut carousel = state(len);
            carousel.jump_to(start);

            carousel.advance(Direction::Next);
            carousel.finish_transition();
            carousel.advance(Direction::Previous);
            carousel.finish_transition();

            prop_assert_eq!(carousel.index(), start);
        }

        #[test]
        fn index_stays_in_bounds(len in 1usize..20, moves in proptest::collection::vec(any::<bool>(), 0..100)) {
            let mut carousel = state(len);
            for forward in moves {
                let direction = if forward { Direction::Next } else { Direction::Previous };
                carousel.advance(direction);
                prop_assert!(carousel.index() < len);
                carousel.finish_transition();
            }
        }
    }
}
