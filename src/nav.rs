/// Scroll distance after which the header switches to its compact style.
pub const SCROLLED_AFTER: f64 = 100.0;
/// Sections count as current a little before their top reaches the header.
const SECTION_LEAD: f64 = 100.0;
pub const HIGHLIGHT_DEBOUNCE_MS: u64 = 100;

pub fn is_header_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Id of the last section (in document order) the viewport has reached.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_LEAD)
        .last()
        .map(|s| s.id.as_str())
}

pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

/// Scroll position that puts a section just under the fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}
