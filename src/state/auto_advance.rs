//! Carousel driven by a repeating timer.
//!
//! [`AutoCarousel`] owns every timer it starts. The ticker and the pending
//! transition settle are both released in `Drop`, so a component that keeps
//! the carousel in its effect and drops it in the effect's cleanup can never
//! be touched by a late callback.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use log::debug;
use yew::Callback;

use super::carousel::{CarouselState, CarouselView, Direction};
use crate::timers::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselTiming {
    /// `None` disables automatic advancement.
    pub autoplay_ms: Option<u32>,
    pub transition_ms: u32,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            autoplay_ms: Some(6000),
            transition_ms: 800,
        }
    }
}

struct Shared<S: Scheduler> {
    scheduler: S,
    timing: CarouselTiming,
    state: RefCell<CarouselState>,
    ticker: RefCell<Option<S::Handle>>,
    settle: RefCell<Option<S::Handle>>,
    on_change: Callback<CarouselView>,
}

impl<S: Scheduler> Shared<S> {
    fn advance(self: &Rc<Self>, direction: Direction) {
        let moved = self.state.borrow_mut().advance(direction);
        if !moved {
            debug!("carousel busy, dropping {:?}", direction);
            return;
        }

        let shared = Rc::clone(self);
        let handle = self.scheduler.after(
            self.timing.transition_ms,
            Box::new(move || shared.finish_transition()),
        );
        // Any previous settle has already fired, otherwise the guard would
        // have rejected this advance.
        let previous = self.settle.borrow_mut().replace(handle);
        drop(previous);

        self.notify();
    }

    fn jump_to(&self, index: usize) {
        if self.state.borrow_mut().jump_to(index) {
            self.notify();
        }
    }

    fn finish_transition(&self) {
        self.state.borrow_mut().finish_transition();
        self.notify();
    }

    fn notify(&self) {
        let view = self.state.borrow().view();
        self.on_change.emit(view);
    }

    fn release(&self) {
        let ticker = self.ticker.borrow_mut().take();
        let settle = self.settle.borrow_mut().take();
        drop(ticker);
        drop(settle);
    }
}

pub struct AutoCarousel<S: Scheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler> AutoCarousel<S> {
    /// Creates the carousel at index 0 and starts the ticker.
    pub fn mount(
        scheduler: S,
        len: NonZeroUsize,
        timing: CarouselTiming,
        on_change: Callback<CarouselView>,
    ) -> Self {
        let shared = Rc::new(Shared {
            scheduler,
            timing,
            state: RefCell::new(CarouselState::new(len)),
            ticker: RefCell::new(None),
            settle: RefCell::new(None),
            on_change,
        });

        if let Some(period) = timing.autoplay_ms {
            let ticking = Rc::clone(&shared);
            let ticker = shared
                .scheduler
                .every(period, Box::new(move || ticking.advance(Direction::Next)));
            *shared.ticker.borrow_mut() = Some(ticker);
        }
        debug!("carousel mounted with {} items, {:?}", len, timing);

        Self { shared }
    }

    pub fn advance(&self, direction: Direction) {
        self.shared.advance(direction);
    }

    pub fn jump_to(&self, index: usize) {
        self.shared.jump_to(index);
    }

    pub fn view(&self) -> CarouselView {
        self.shared.state.borrow().view()
    }
}

impl<S: Scheduler> Drop for AutoCarousel<S> {
    fn drop(&mut self) {
        self.shared.release();
        debug!("carousel unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::manual::ManualScheduler;

    const TIMING: CarouselTiming = CarouselTiming {
        autoplay_ms: Some(6000),
        transition_ms: 800,
    };

    fn mount(
        scheduler: &ManualScheduler,
        len: usize,
        timing: CarouselTiming,
    ) -> (AutoCarousel<ManualScheduler>, Rc<RefCell<Vec<CarouselView>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let carousel = AutoCarousel::mount(
            scheduler.clone(),
            NonZeroUsize::new(len).unwrap(),
            timing,
            Callback::from(move |view| sink.borrow_mut().push(view)),
        );
        (carousel, seen)
    }

    #[test]
    fn ticker_advances_and_wraps() {
        let scheduler = ManualScheduler::new();
        let (carousel, _) = mount(&scheduler, 3, TIMING);

        let mut indices = Vec::new();
        for _ in 0..4 {
            scheduler.advance_by(6000);
            indices.push(carousel.view().index);
        }
        assert_eq!(indices, vec![1, 2, 0, 1]);
    }

    #[test]
    fn guard_clears_after_transition() {
        let scheduler = ManualScheduler::new();
        let (carousel, _) = mount(&scheduler, 5, TIMING);

        carousel.advance(Direction::Next);
        assert_eq!(carousel.view(), CarouselView { index: 1, transitioning: true });

        scheduler.advance_by(799);
        assert!(carousel.view().transitioning);
        scheduler.advance_by(1);
        assert!(!carousel.view().transitioning);

        carousel.advance(Direction::Next);
        assert_eq!(carousel.view().index, 2);
    }

    #[test]
    fn manual_advance_during_auto_transition_is_dropped() {
        let scheduler = ManualScheduler::new();
        let (carousel, seen) = mount(&scheduler, 5, TIMING);

        scheduler.advance_by(6000);
        assert_eq!(carousel.view(), CarouselView { index: 1, transitioning: true });
        let emitted = seen.borrow().len();

        carousel.advance(Direction::Previous);
        carousel.advance(Direction::Next);
        assert_eq!(carousel.view(), CarouselView { index: 1, transitioning: true });
        assert_eq!(seen.borrow().len(), emitted);
    }

    #[test]
    fn jump_wins_over_in_flight_transition() {
        let scheduler = ManualScheduler::new();
        let (carousel, seen) = mount(&scheduler, 5, TIMING);

        carousel.advance(Direction::Next);
        carousel.jump_to(4);
        assert_eq!(carousel.view(), CarouselView { index: 4, transitioning: true });
        assert_eq!(seen.borrow().last(), Some(&CarouselView { index: 4, transitioning: true }));
    }

    #[test]
    fn emits_every_visible_change() {
        let scheduler = ManualScheduler::new();
        let (carousel, seen) = mount(&scheduler, 2, TIMING);

        carousel.advance(Direction::Next);
        scheduler.advance_by(800);

        assert_eq!(
            *seen.borrow(),
            vec![
                CarouselView { index: 1, transitioning: true },
                CarouselView { index: 1, transitioning: false },
            ]
        );
    }

    #[test]
    fn dropping_stops_the_ticker() {
        let scheduler = ManualScheduler::new();
        let (carousel, seen) = mount(&scheduler, 4, TIMING);

        scheduler.advance_by(6000 + 800);
        let emitted = seen.borrow().len();
        drop(carousel);

        scheduler.advance_by(60_000);
        assert_eq!(seen.borrow().len(), emitted);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_mid_transition_cancels_settle() {
        let scheduler = ManualScheduler::new();
        let (carousel, seen) = mount(&scheduler, 4, TIMING);

        carousel.advance(Direction::Next);
        assert_eq!(scheduler.pending(), 2);
        drop(carousel);

        assert_eq!(scheduler.pending(), 0);
        scheduler.advance_by(10_000);
        assert_eq!(
            *seen.borrow(),
            vec![CarouselView { index: 1, transitioning: true }]
        );
    }

    #[test]
    fn autoplay_can_be_disabled() {
        let scheduler = ManualScheduler::new();
        let timing = CarouselTiming { autoplay_ms: None, ..TIMING };
        let (carousel, seen) = mount(&scheduler, 3, timing);

        assert_eq!(scheduler.pending(), 0);
        scheduler.advance_by(30_000);
        assert_eq!(carousel.view().index, 0);
        assert!(seen.borrow().is_empty());
    }
}
