//! Small cosmetic behaviours: loader, fade-in, parallax, hover, tooltips
//! and the hero photo.

use std::rc::Rc;
use std::time::Duration;

use crate::schedule::Scheduler;

const LOADER_HOLD: Duration = Duration::from_millis(2000);
const LOADER_FADE: Duration = Duration::from_millis(500);
pub const BODY_FADE_DELAY: Duration = Duration::from_millis(100);
pub const TOOLTIP_DELAY: Duration = Duration::from_millis(100);
const PARALLAX_RATE: f64 = 0.5;

pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// File types offered when picking a hero photo.
pub const PHOTO_ACCEPT: &str = "image/*";
pub const PHOTO_PROMPT: &str = "Click to add photo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    FadingOut,
    Gone,
}

/// Holds the loading screen for a moment after load, then fades it out.
pub fn run_loader<F>(scheduler: Rc<dyn Scheduler>, on_phase: F)
where
    F: Fn(LoaderPhase) + 'static,
{
    let next = scheduler.clone();
    scheduler.schedule(
        LOADER_HOLD,
        Box::new(move || {
            on_phase(LoaderPhase::FadingOut);
            next.schedule(LOADER_FADE, Box::new(move || on_phase(LoaderPhase::Gone)));
        }),
    );
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_RATE)
}

/// `background-image` value showing a picked photo, or nothing while the
/// placeholder is still empty.
pub fn photo_background(data_url: Option<&str>) -> String {
    data_url
        .map(|url| format!("url({url})"))
        .unwrap_or_default()
}

/// Tooltip text for a social link, from its icon's classes.
pub fn tooltip_label(icon_classes: &str) -> &'static str {
    let classes = icon_classes.split_whitespace().collect::<Vec<_>>();
    [
        ("fa-github", "GitHub"),
        ("fa-linkedin", "LinkedIn"),
        ("fa-twitter", "Twitter"),
        ("fa-envelope", "Email"),
    ]
    .into_iter()
    .find(|(class, _)| classes.contains(class))
    .map(|(_, label)| label)
    .unwrap_or("Social")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::schedule::testing::ManualScheduler;

    #[test]
    fn test_loader_phases() {
        let sched = Rc::new(ManualScheduler::new());
        let phases = Rc::new(RefCell::new(vec![LoaderPhase::Visible]));
        let sink = phases.clone();
        run_loader(sched.clone(), move |p| sink.borrow_mut().push(p));

        sched.advance(Duration::from_millis(1999));
        assert_eq!(phases.borrow().len(), 1);
        sched.advance(Duration::from_millis(1));
        assert_eq!(phases.borrow().last(), Some(&LoaderPhase::FadingOut));
        sched.advance(Duration::from_millis(500));
        assert_eq!(
            *phases.borrow(),
            vec![LoaderPhase::Visible, LoaderPhase::FadingOut, LoaderPhase::Gone]
        );
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
        assert_eq!(parallax_transform(300.0), "translateY(150px)");
    }

    #[test]
    fn test_photo_background() {
        assert_eq!(photo_background(None), "");
        assert_eq!(
            photo_background(Some("data:image/png;base64,iVBORw0KGgo=")),
            "url(data:image/png;base64,iVBORw0KGgo=)"
        );
    }

    #[test]
    fn test_tooltip_labels() {
        assert_eq!(tooltip_label("fab fa-github"), "GitHub");
        assert_eq!(tooltip_label("fab fa-linkedin"), "LinkedIn");
        assert_eq!(tooltip_label("fas fa-envelope"), "Email");
        assert_eq!(tooltip_label("fab fa-github-alt"), "Social");
        assert_eq!(tooltip_label(""), "Social");
    }
}
