use std::rc::Rc;
use std::time::Duration;

use crate::dom::Element;
use crate::schedule::Scheduler;

pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const TARGET_ATTR: &str = "data-target";

const TICK: Duration = Duration::from_millis(20);
const STEPS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterTick {
    /// Intermediate value, another tick follows.
    Show(i64),
    /// Final value, always exactly the target.
    Done(i64),
}

/// Running value of one stat counter.
#[derive(Debug, Clone)]
pub struct CounterRun {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterRun {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            increment: target as f64 / STEPS,
            current: 0.0,
        }
    }

    pub fn tick(&mut self) -> CounterTick {
        if self.current < self.target as f64 {
            self.current += self.increment;
            let shown = (self.current.ceil() as i64).min(self.target);
            CounterTick::Show(shown)
        } else {
            CounterTick::Done(self.target)
        }
    }
}

/// Starts a counter on every element that carries a valid target.
pub fn animate_counters<E: Element>(counters: Vec<E>, scheduler: Rc<dyn Scheduler>) {
    for counter in counters {
        let Some(target) = counter
            .attribute(TARGET_ATTR)
            .and_then(|t| t.trim().parse::<i64>().ok())
        else {
            log::warn!("counter {:?} has no usable {TARGET_ATTR}", counter.id());
            continue;
        };
        run(CounterRun::new(target), counter, scheduler.clone());
    }
}

fn run<E: Element>(mut counter: CounterRun, el: E, scheduler: Rc<dyn Scheduler>) {
    match counter.tick() {
        CounterTick::Show(value) => {
            el.set_text(&value.to_string());
            let next = scheduler.clone();
            scheduler.schedule(TICK, Box::new(move || run(counter, el, next)));
        }
        CounterTick::Done(value) => el.set_text(&value.to_string()),
    }
}
