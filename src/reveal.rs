//! Entrance animations driven by viewport intersection.
//!
//! Fade elements start hidden and offset, and settle into place the first
//! time they intersect the viewport. The `#about` and `#skills` sections
//! also kick off their counters and skill bars, then drop out of the
//! observed set so those animations run once per page.

use std::rc::Rc;

use crate::counter::{animate_counters, COUNTER_SELECTOR};
use crate::dom::{Document, Element};
use crate::schedule::Scheduler;
use crate::skills::{animate_skill_bars, SKILL_BAR_SELECTOR};

pub const REVEAL_SELECTOR: &str = ".fade-in-up, .fade-in-left, .fade-in-right, #about, #skills";
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -100px 0px";

const TRANSITION: &str = "all 0.8s ease-out";
const ABOUT_ID: &str = "about";
const SKILLS_ID: &str = "skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealRole {
    FadeUp,
    FadeLeft,
    FadeRight,
    CounterTrigger,
    SkillTrigger,
}

impl RevealRole {
    pub fn of<E: Element>(el: &E) -> Vec<RevealRole> {
        let mut roles = Vec::new();
        if el.has_class("fade-in-up") {
            roles.push(Self::FadeUp);
        }
        if el.has_class("fade-in-left") {
            roles.push(Self::FadeLeft);
        }
        if el.has_class("fade-in-right") {
            roles.push(Self::FadeRight);
        }
        match el.id().as_deref() {
            Some(ABOUT_ID) => roles.push(Self::CounterTrigger),
            Some(SKILLS_ID) => roles.push(Self::SkillTrigger),
            _ => {}
        }
        roles
    }

    fn initial_transform(self) -> Option<&'static str> {
        match self {
            Self::FadeUp => Some("translateY(30px)"),
            Self::FadeLeft => Some("translateX(-30px)"),
            Self::FadeRight => Some("translateX(30px)"),
            Self::CounterTrigger | Self::SkillTrigger => None,
        }
    }

    fn final_transform(self) -> Option<&'static str> {
        match self {
            Self::FadeUp => Some("translateY(0)"),
            Self::FadeLeft | Self::FadeRight => Some("translateX(0)"),
            Self::CounterTrigger | Self::SkillTrigger => None,
        }
    }

    fn is_one_shot(self) -> bool {
        matches!(self, Self::CounterTrigger | Self::SkillTrigger)
    }
}

/// One intersection report from the platform.
#[derive(Debug, Clone)]
pub struct Intersection<E> {
    pub target: E,
    pub is_intersecting: bool,
}

struct Observed<E> {
    el: E,
    roles: Vec<RevealRole>,
}

pub struct RevealObserver<E: Element> {
    observed: Vec<Observed<E>>,
    scheduler: Rc<dyn Scheduler>,
}

impl<E: Element> RevealObserver<E> {
    /// Collects every reveal element and puts fade elements into their
    /// hidden starting state.
    pub fn attach<D>(doc: &D, scheduler: Rc<dyn Scheduler>) -> Self
    where
        D: Document<Element = E>,
    {
        Self::new(doc.query_all(REVEAL_SELECTOR), scheduler)
    }

    pub fn new(elements: Vec<E>, scheduler: Rc<dyn Scheduler>) -> Self {
        let observed = elements
            .into_iter()
            .filter_map(|el| {
                let roles = RevealRole::of(&el);
                if roles.is_empty() {
                    return None;
                }
                for transform in roles.iter().filter_map(|r| r.initial_transform()) {
                    el.set_style("opacity", "0");
                    el.set_style("transform", transform);
                    el.set_style("transition", TRANSITION);
                }
                Some(Observed { el, roles })
            })
            .collect::<Vec<_>>();
        log::debug!("observing {} reveal elements", observed.len());
        Self {
            observed,
            scheduler,
        }
    }

    /// Elements the platform observer should watch.
    pub fn targets(&self) -> Vec<E> {
        self.observed.iter().map(|o| o.el.clone()).collect()
    }

    /// Applies reveals for intersecting entries and returns the elements
    /// that must no longer be observed.
    pub fn on_intersection(&mut self, entries: Vec<Intersection<E>>) -> Vec<E> {
        let mut finished = Vec::new();
        for entry in entries.into_iter().filter(|e| e.is_intersecting) {
            let Some(pos) = self.observed.iter().position(|o| o.el == entry.target) else {
                continue;
            };
            let roles = self.observed[pos].roles.clone();
            for transform in roles.iter().filter_map(|r| r.final_transform()) {
                entry.target.set_style("opacity", "1");
                entry.target.set_style("transform", transform);
            }
            for role in &roles {
                match role {
                    RevealRole::CounterTrigger => animate_counters(
                        entry.target.descendants(COUNTER_SELECTOR),
                        self.scheduler.clone(),
                    ),
                    RevealRole::SkillTrigger => animate_skill_bars(
                        entry.target.descendants(SKILL_BAR_SELECTOR),
                        self.scheduler.clone(),
                    ),
                    _ => {}
                }
            }
            if roles.iter().any(|r| r.is_one_shot()) {
                self.observed.remove(pos);
                finished.push(entry.target);
            }
        }
        finished
    }
}
