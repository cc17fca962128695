#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
    ToggleMenu,
}

impl Shortcut {
    /// `focused_tag` is the tag name of the active element, as the DOM
    /// reports it (upper case).
    pub fn from_key(key: &str, ctrl: bool, alt: bool, focused_tag: Option<&str>) -> Option<Self> {
        if ctrl || alt {
            return None;
        }
        if matches!(focused_tag, Some("INPUT") | Some("TEXTAREA")) {
            return None;
        }
        match key.to_lowercase().as_str() {
            "t" => Some(Self::ToggleTheme),
            "m" => Some(Self::ToggleMenu),
            _ => None,
        }
    }
}

pub const HELP: &str = "Keyboard shortcuts:\n- Press 'T' to toggle theme\n- Press 'M' to toggle mobile menu";
