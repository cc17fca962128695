use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use crate::schedule::Scheduler;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypingError {
    #[error("typing animation needs at least one phrase")]
    NoPhrases,
    #[error("phrase {0} is empty")]
    EmptyPhrase(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypingPace {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    /// Pause with the full phrase on screen.
    pub hold_full: Duration,
    /// Pause with nothing on screen before the next phrase.
    pub hold_empty: Duration,
}

impl Default for TypingPace {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            delete_interval: Duration::from_millis(50),
            hold_full: Duration::from_millis(2000),
            hold_empty: Duration::from_millis(500),
        }
    }
}

/// Cycles through the hero phrases, typing one character at a time and
/// then erasing them again.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    pace: TypingPace,
    phrase_index: usize,
    char_count: usize,
    deleting: bool,
}

impl TypingAnimator {
    pub fn new(phrases: Vec<String>, pace: TypingPace) -> Result<Self, TypingError> {
        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }
        if let Some(i) = phrases.iter().position(|p| p.is_empty()) {
            return Err(TypingError::EmptyPhrase(i));
        }
        Ok(Self {
            phrases,
            pace,
            phrase_index: 0,
            char_count: 0,
            deleting: false,
        })
    }

    /// Advances one character and returns the text to display along with
    /// the delay before the next step.
    pub fn step(&mut self) -> (String, Duration) {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();

        let mut delay = if self.deleting {
            self.char_count -= 1;
            self.pace.delete_interval
        } else {
            self.char_count += 1;
            self.pace.type_interval
        };
        let text = phrase.chars().take(self.char_count).collect::<String>();

        if !self.deleting && self.char_count == len {
            self.deleting = true;
            delay = self.pace.hold_full;
        } else if self.deleting && self.char_count == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay = self.pace.hold_empty;
        }

        (text, delay)
    }

    /// Runs the animation for the lifetime of the page. There is no way to
    /// stop it, so start it once.
    pub fn start<F>(self, scheduler: Rc<dyn Scheduler>, render: F)
    where
        F: Fn(&str) + 'static,
    {
        log::debug!("starting typing animation over {} phrases", self.phrases.len());
        run(self, scheduler, Rc::new(render));
    }
}

fn run(mut animator: TypingAnimator, scheduler: Rc<dyn Scheduler>, render: Rc<dyn Fn(&str)>) {
    let (text, delay) = animator.step();
    render(&text);
    let next = scheduler.clone();
    scheduler.schedule(delay, Box::new(move || run(animator, next, render)));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::schedule::testing::ManualScheduler;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(
            TypingAnimator::new(vec![], TypingPace::default()).unwrap_err(),
            TypingError::NoPhrases
        );
        assert_eq!(
            TypingAnimator::new(phrases(&["a", ""]), TypingPace::default()).unwrap_err(),
            TypingError::EmptyPhrase(1)
        );
    }

    #[test]
    fn test_single_phrase_sequence() {
        let mut animator = TypingAnimator::new(phrases(&["AB"]), TypingPace::default()).unwrap();
        let ms = Duration::from_millis;
        let steps = (0..8).map(|_| animator.step()).collect::<Vec<_>>();
        assert_eq!(
            steps,
            vec![
                ("A".to_string(), ms(100)),
                ("AB".to_string(), ms(2000)),
                ("A".to_string(), ms(50)),
                ("".to_string(), ms(500)),
                ("A".to_string(), ms(100)),
                ("AB".to_string(), ms(2000)),
                ("A".to_string(), ms(50)),
                ("".to_string(), ms(500)),
            ]
        );
        assert_eq!(animator.phrase_index, 0);
    }

    #[test]
    fn test_visits_phrases_in_order_with_wraparound() {
        let mut animator =
            TypingAnimator::new(phrases(&["one", "two", "three"]), TypingPace::default()).unwrap();
        let mut completed = Vec::new();
        for _ in 0..200 {
            let before = animator.phrase_index;
            let (text, _) = animator.step();
            if animator.phrase_index != before {
                // the phrase only advances once the screen is empty again
                assert!(text.is_empty());
                completed.push(before);
            }
        }
        assert!(completed.len() >= 6);
        for (i, idx) in completed.iter().enumerate() {
            assert_eq!(*idx, i % 3);
        }
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut animator = TypingAnimator::new(phrases(&["héé"]), TypingPace::default()).unwrap();
        assert_eq!(animator.step().0, "h");
        assert_eq!(animator.step().0, "hé");
        let (text, delay) = animator.step();
        assert_eq!(text, "héé");
        assert_eq!(delay, Duration::from_millis(2000));
        assert!(animator.deleting);
    }

    #[test]
    fn test_start_renders_on_schedule() {
        let sched = Rc::new(ManualScheduler::new());
        let shown = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = shown.clone();
        TypingAnimator::new(phrases(&["AB"]), TypingPace::default())
            .unwrap()
            .start(sched.clone(), move |t| sink.borrow_mut().push(t.to_string()));

        // first character renders immediately
        assert_eq!(*shown.borrow(), vec!["A"]);
        sched.advance(Duration::from_millis(100));
        assert_eq!(*shown.borrow(), vec!["A", "AB"]);
        sched.advance(Duration::from_millis(1999));
        assert_eq!(shown.borrow().len(), 2);
        sched.advance(Duration::from_millis(1));
        sched.advance(Duration::from_millis(50));
        assert_eq!(*shown.borrow(), vec!["A", "AB", "A", ""]);
        sched.advance(Duration::from_millis(500));
        assert_eq!(shown.borrow().last().map(String::as_str), Some("A"));
        assert_eq!(sched.pending(), 1);
    }
}
