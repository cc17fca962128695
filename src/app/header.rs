use leptos::{ev::MouseEvent, prelude::*};

#[cfg(feature = "hydrate")]
use std::{rc::Rc, time::Duration};

#[cfg(feature = "hydrate")]
use leptos::ev::KeyboardEvent;
#[cfg(feature = "hydrate")]
use leptos_use::use_event_listener;

#[cfg(feature = "hydrate")]
use crate::browser::{focused_tag, scroll_to_section, scroll_y, section_offsets, LocalStore};
#[cfg(feature = "hydrate")]
use crate::debounce::Debounced;
#[cfg(feature = "hydrate")]
use crate::nav::{active_section, HIGHLIGHT_DEBOUNCE_MS};
#[cfg(feature = "hydrate")]
use crate::schedule::TimeoutScheduler;
#[cfg(feature = "hydrate")]
use crate::shortcuts::Shortcut;
#[cfg(feature = "hydrate")]
use crate::theme::ThemeController;

use crate::content::SiteContent;
use crate::nav::{is_header_scrolled, is_link_active, MenuState};
use crate::theme::Theme;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let (theme, set_theme) = signal(Theme::default());
    let (menu, set_menu) = signal(MenuState::default());
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal(None::<String>);

    #[cfg(feature = "hydrate")]
    let controller = StoredValue::new_local(ThemeController::load(LocalStore::new()));

    // stored theme is applied after hydration so the server markup matches
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| set_theme.set(controller.with_value(|c| c.current())));

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let theme = theme.get();
        if let Some(body) = document().body() {
            body.set_class_name(&theme.body_class());
        }
    });

    let toggle_theme = move || {
        #[cfg(feature = "hydrate")]
        controller.update_value(|c| set_theme.set(c.toggle()));
        #[cfg(not(feature = "hydrate"))]
        set_theme.update(|t| *t = t.toggled());
    };
    let toggle_menu = move || set_menu.update(|m| *m = m.toggled());

    #[cfg(feature = "hydrate")]
    {
        let highlight = Debounced::new(
            move || set_active.set(active_section(&section_offsets(), scroll_y()).map(str::to_string)),
            Duration::from_millis(HIGHLIGHT_DEBOUNCE_MS),
            Rc::new(TimeoutScheduler),
        );
        let _ = use_event_listener(window(), leptos::ev::scroll, move |_| {
            set_scrolled.set(is_header_scrolled(scroll_y()));
            highlight.call();
        });

        let _ = use_event_listener(window(), leptos::ev::keydown, move |ev: KeyboardEvent| {
            let focused = focused_tag();
            match Shortcut::from_key(&ev.key(), ev.ctrl_key(), ev.alt_key(), focused.as_deref()) {
                Some(Shortcut::ToggleTheme) => toggle_theme(),
                Some(Shortcut::ToggleMenu) => toggle_menu(),
                None => {}
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_scrolled, set_active);

    let on_nav = move |ev: MouseEvent, href: &'static str| {
        ev.prevent_default();
        set_menu.update(|m| *m = m.closed());
        #[cfg(feature = "hydrate")]
        scroll_to_section(href.trim_start_matches('#'));
        #[cfg(not(feature = "hydrate"))]
        let _ = href;
    };

    view! {
        <header
            id="header"
            class=move || if scrolled.get() { "header scrolled" } else { "header" }
        >
            <div class="nav-container">
                <a href="#home" class="logo" on:click=move |ev| on_nav(ev, "#home")>
                    {content.name.clone()}
                </a>
                <nav
                    id="nav"
                    class=move || if menu.get().is_open() { "nav nav-open" } else { "nav" }
                >
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class=move || {
                                        if is_link_active(href, active.get().as_deref()) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                    on:click=move |ev| on_nav(ev, href)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="nav-actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        aria-label="Toggle theme"
                        on:click=move |_| toggle_theme()
                    >
                        <i class=move || theme.get().icon_class()></i>
                    </button>
                    <button
                        id="menu-toggle"
                        class=move || {
                            if menu.get().is_open() { "menu-toggle menu-open" } else { "menu-toggle" }
                        }
                        aria-label="Toggle menu"
                        on:click=move |_| toggle_menu()
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
