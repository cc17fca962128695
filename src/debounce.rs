use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::Scheduler;

/// Collapses bursts of calls into one trailing call.
///
/// The scheduler can't cancel timers, so each call bumps a generation
/// counter and a timer only fires the callback if nothing newer arrived.
pub struct Debounced {
    wait: Duration,
    generation: Rc<Cell<u64>>,
    callback: Rc<dyn Fn()>,
    scheduler: Rc<dyn Scheduler>,
}

impl Debounced {
    pub fn new<F>(callback: F, wait: Duration, scheduler: Rc<dyn Scheduler>) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            wait,
            generation: Rc::new(Cell::new(0)),
            callback: Rc::new(callback),
            scheduler,
        }
    }

    pub fn call(&self) {
        let mine = self.generation.get().wrapping_add(1);
        self.generation.set(mine);
        let generation = self.generation.clone();
        let callback = self.callback.clone();
        self.scheduler.schedule(
            self.wait,
            Box::new(move || {
                if generation.get() == mine {
                    callback();
                }
            }),
        );
    }
}
