use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Fire-and-forget timer scheduling.
///
/// Every animation in the crate suspends only through this trait, so the
/// browser can back it with `setTimeout` while tests drive a manual clock.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Schedules on the browser's `setTimeout`.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        leptos::prelude::set_timeout(task, delay);
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use super::{Scheduler, Task};

    struct Pending {
        due: Duration,
        seq: u64,
        task: Task,
    }

    /// Deterministic clock: tasks only run when the test advances time.
    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<Duration>,
        seq: Cell<u64>,
        queue: RefCell<Vec<Pending>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> Duration {
            self.now.get()
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Runs every task due within `by`, including tasks scheduled by
        /// those tasks, in due-time order (ties in scheduling order).
        pub fn advance(&self, by: Duration) {
            let target = self.now.get() + by;
            while let Some(pending) = self.pop_due(target) {
                self.now.set(pending.due);
                (pending.task)();
            }
            self.now.set(target);
        }

        fn pop_due(&self, target: Duration) -> Option<Pending> {
            let mut queue = self.queue.borrow_mut();
            let idx = queue
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due <= target)
                .min_by_key(|(_, p)| (p.due, p.seq))
                .map(|(i, _)| i)?;
            Some(queue.swap_remove(idx))
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Task) {
            let seq = self.seq.get();
            self.seq.set(seq + 1);
            self.queue.borrow_mut().push(Pending {
                due: self.now.get() + delay,
                seq,
                task,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::testing::ManualScheduler;
    use super::*;

    #[test]
    fn test_tasks_run_in_due_order() {
        let sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, name) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
            let log = log.clone();
            sched.schedule(
                Duration::from_millis(delay),
                Box::new(move || log.borrow_mut().push(name)),
            );
        }
        sched.advance(Duration::from_millis(25));
        assert_eq!(*log.borrow(), vec!["a", "a2", "b"]);
        assert_eq!(sched.pending(), 1);
        sched.advance(Duration::from_millis(5));
        assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_rescheduling_from_task() {
        let sched = Rc::new(ManualScheduler::new());
        let hits = Rc::new(RefCell::new(Vec::new()));
        let inner_sched = sched.clone();
        let inner_hits = hits.clone();
        sched.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner_hits.borrow_mut().push(inner_sched.now());
                let hits = inner_hits.clone();
                let clock = inner_sched.clone();
                inner_sched.schedule(
                    Duration::from_millis(10),
                    Box::new(move || hits.borrow_mut().push(clock.now())),
                );
            }),
        );
        sched.advance(Duration::from_millis(100));
        assert_eq!(
            *hits.borrow(),
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
        assert_eq!(sched.now(), Duration::from_millis(100));
    }
}
