//! Host timer facility.
//!
//! Components never touch `setInterval`/`setTimeout` directly. They ask a
//! [`Scheduler`] for a handle and keep it for as long as the callback should
//! stay alive. Dropping the handle cancels the callback.

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler: 'static {
    /// Cancels its callback when dropped.
    type Handle: 'static;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser event loop timers backed by `gloo-timers`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(period_ms, move || tick()))
    }

    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(delay_ms, move || fire()))
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Virtual clock used to drive timer-based behaviour in tests.

    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    enum Job {
        Repeat(Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
    }

    struct Task {
        id: u64,
        due: u64,
        period: u64,
        job: Job,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
        running: Option<u64>,
        running_cancelled: bool,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            let Some(clock) = self.clock.upgrade() else {
                return;
            };
            // Take the task out before dropping it: its closure may own
            // other handles whose drop re-enters the clock.
            let removed = {
                let mut clock = clock.borrow_mut();
                if clock.running == Some(self.id) {
                    clock.running_cancelled = true;
                }
                clock
                    .tasks
                    .iter()
                    .position(|task| task.id == self.id)
                    .map(|pos| clock.tasks.remove(pos))
            };
            drop(removed);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Number of timers that are still scheduled.
        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        /// Moves the clock forward, firing every timer that comes due on the way.
        pub fn advance_by(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let task = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(pos, _)| pos);
                    match next {
                        Some(pos) => {
                            let task = clock.tasks.remove(pos);
                            clock.now = task.due;
                            clock.running = Some(task.id);
                            clock.running_cancelled = false;
                            task
                        }
                        None => break,
                    }
                };

                let Task { id, due, period, job } = task;
                match job {
                    Job::Once(fire) => fire(),
                    Job::Repeat(mut tick) => {
                        tick();
                        let mut clock = self.clock.borrow_mut();
                        if !clock.running_cancelled {
                            clock.tasks.push(Task {
                                id,
                                due: due + period,
                                period,
                                job: Job::Repeat(tick),
                            });
                        }
                    }
                }
                self.clock.borrow_mut().running = None;
            }
            self.clock.borrow_mut().now = target;
        }

        fn schedule(&self, delay: u64, period: u64, job: Job) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push(Task { id, due, period, job });
            ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let period = u64::from(period_ms.max(1));
            self.schedule(period, period, Job::Repeat(tick))
        }

        fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> ManualHandle {
            self.schedule(u64::from(delay_ms), 0, Job::Once(fire))
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn interval_fires_once_per_period() {
            let scheduler = ManualScheduler::new();
            let ticks = Rc::new(Cell::new(0));
            let counter = ticks.clone();
            let _handle = scheduler.every(100, Box::new(move || counter.set(counter.get() + 1)));

            scheduler.advance_by(99);
            assert_eq!(ticks.get(), 0);
            scheduler.advance_by(1);
            assert_eq!(ticks.get(), 1);
            scheduler.advance_by(350);
            assert_eq!(ticks.get(), 4);
        }

        #[test]
        fn dropping_handle_cancels() {
            let scheduler = ManualScheduler::new();
            let fired = Rc::new(Cell::new(false));
            let flag = fired.clone();
            let handle = scheduler.after(50, Box::new(move || flag.set(true)));
            assert_eq!(scheduler.pending(), 1);

            drop(handle);
            scheduler.advance_by(100);
            assert!(!fired.get());
            assert_eq!(scheduler.pending(), 0);
        }

        #[test]
        fn one_shot_is_removed_after_firing() {
            let scheduler = ManualScheduler::new();
            let _handle = scheduler.after(10, Box::new(|| {}));
            scheduler.advance_by(10);
            assert_eq!(scheduler.pending(), 0);
            assert_eq!(scheduler.now(), 10);
        }
    }
}
