use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::Scheduler;

pub const ALL: &str = "all";
/// Matches the card fade-out transition.
const COLLAPSE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Shown,
    /// Fading out, still taking up space.
    Hidden,
    /// Removed from layout.
    Collapsed,
}

impl CardState {
    pub fn is_hidden(self) -> bool {
        !matches!(self, Self::Shown)
    }
}

pub fn matches(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

type Listener = Rc<dyn Fn(usize, CardState)>;

/// Visibility of each project card under the selected category.
pub struct ProjectFilter {
    categories: Vec<String>,
    states: Rc<RefCell<Vec<CardState>>>,
    scheduler: Rc<dyn Scheduler>,
    listener: Listener,
}

impl ProjectFilter {
    pub fn new<F>(categories: Vec<String>, scheduler: Rc<dyn Scheduler>, listener: F) -> Self
    where
        F: Fn(usize, CardState) + 'static,
    {
        let states = vec![CardState::Shown; categories.len()];
        Self {
            categories,
            states: Rc::new(RefCell::new(states)),
            scheduler,
            listener: Rc::new(listener),
        }
    }

    pub fn states(&self) -> Vec<CardState> {
        self.states.borrow().clone()
    }

    pub fn select(&self, filter: &str) {
        for (i, category) in self.categories.iter().enumerate() {
            if matches(filter, category) {
                self.update(i, CardState::Shown);
                continue;
            }
            // already collapsed cards stay out of the layout
            if self.states.borrow()[i] == CardState::Collapsed {
                continue;
            }
            self.update(i, CardState::Hidden);
            let states = self.states.clone();
            let listener = self.listener.clone();
            self.scheduler.schedule(
                COLLAPSE_DELAY,
                Box::new(move || {
                    let still_hidden = states.borrow()[i] == CardState::Hidden;
                    if still_hidden {
                        states.borrow_mut()[i] = CardState::Collapsed;
                        listener(i, CardState::Collapsed);
                    }
                }),
            );
        }
    }

    fn update(&self, index: usize, state: CardState) {
        let changed = {
            let mut states = self.states.borrow_mut();
            let changed = states[index] != state;
            states[index] = state;
            changed
        };
        if changed {
            (self.listener)(index, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::testing::ManualScheduler;

    fn board(sched: &Rc<ManualScheduler>) -> (ProjectFilter, Rc<RefCell<Vec<(usize, CardState)>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let categories = ["web", "ai", "web"].iter().map(|s| s.to_string()).collect();
        let filter = ProjectFilter::new(categories, sched.clone(), move |i, s| {
            sink.borrow_mut().push((i, s))
        });
        (filter, events)
    }

    #[test]
    fn test_hidden_cards_collapse_later() {
        let sched = Rc::new(ManualScheduler::new());
        let (filter, events) = board(&sched);
        filter.select("web");
        assert_eq!(
            filter.states(),
            vec![CardState::Shown, CardState::Hidden, CardState::Shown]
        );
        sched.advance(Duration::from_millis(300));
        assert_eq!(filter.states()[1], CardState::Collapsed);
        assert_eq!(
            *events.borrow(),
            vec![(1, CardState::Hidden), (1, CardState::Collapsed)]
        );
    }

    #[test]
    fn test_reshown_card_does_not_collapse() {
        let sched = Rc::new(ManualScheduler::new());
        let (filter, _) = board(&sched);
        filter.select("ai");
        sched.advance(Duration::from_millis(100));
        filter.select(ALL);
        sched.advance(Duration::from_millis(500));
        assert!(filter.states().iter().all(|s| *s == CardState::Shown));
    }

    #[test]
    fn test_matches() {
        assert!(matches(ALL, "anything"));
        assert!(matches("ai", "ai"));
        assert!(!matches("ai", "web"));
        assert!(CardState::Collapsed.is_hidden());
    }
}
