use std::rc::Rc;
use std::time::Duration;

use crate::dom::Element;
use crate::schedule::Scheduler;

pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const WIDTH_ATTR: &str = "data-width";

/// Bars fill after this delay; the glide itself is a CSS transition.
const FILL_DELAY: Duration = Duration::from_millis(500);

pub fn parse_percent(raw: &str) -> Option<f64> {
    let value = raw.trim().trim_end_matches('%').parse::<f64>().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

pub fn animate_skill_bars<E: Element>(bars: Vec<E>, scheduler: Rc<dyn Scheduler>) {
    for bar in bars {
        let Some(percent) = bar.attribute(WIDTH_ATTR).as_deref().and_then(parse_percent) else {
            log::warn!("skill bar {:?} has no usable {WIDTH_ATTR}", bar.id());
            continue;
        };
        scheduler.schedule(
            FILL_DELAY,
            Box::new(move || bar.set_style("width", &format!("{percent}%"))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::FakeElement;
    use crate::schedule::testing::ManualScheduler;

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("85"), Some(85.0));
        assert_eq!(parse_percent(" 42.5% "), Some(42.5));
        assert_eq!(parse_percent("140"), Some(100.0));
        assert_eq!(parse_percent("-3"), Some(0.0));
        assert_eq!(parse_percent("NaN"), None);
        assert_eq!(parse_percent("wide"), None);
    }

    #[test]
    fn test_bars_fill_after_delay() {
        let sched = Rc::new(ManualScheduler::new());
        let rust = FakeElement::new().with_attr(WIDTH_ATTR, "90");
        let missing = FakeElement::new();
        animate_skill_bars(vec![rust.clone(), missing.clone()], sched.clone());

        sched.advance(Duration::from_millis(499));
        assert_eq!(rust.style("width"), None);
        sched.advance(Duration::from_millis(1));
        assert_eq!(rust.style("width").as_deref(), Some("90%"));
        assert_eq!(missing.style("width"), None);
    }
}
