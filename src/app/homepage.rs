use leptos::prelude::*;
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos_use::use_event_listener;

#[cfg(feature = "hydrate")]
use crate::effects::run_loader;
#[cfg(feature = "hydrate")]
use crate::typing::{TypingAnimator, TypingPace};

use super::contact::ContactSection;
use super::projects::ProjectsSection;
use crate::content::{SiteContent, Social};
use crate::effects::{
    parallax_transform, photo_background, tooltip_label, LoaderPhase, PHOTO_PROMPT, TOOLTIP_DELAY,
};
use crate::resume::{file_name, RESUME_PATH};
use crate::schedule::{Scheduler, TimeoutScheduler};

#[component]
pub fn HomePage() -> impl IntoView {
    let (loader, set_loader) = signal(LoaderPhase::Visible);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler);
        if let Err(e) = crate::browser::install_reveal(scheduler.clone()) {
            log::warn!("couldn't start reveal animations: {e:?}");
        }
        crate::browser::fade_in_body(scheduler.clone());
        run_loader(scheduler, move |phase| set_loader.set(phase));
        log::info!(
            "Welcome! Built with Rust, Leptos and WebAssembly.\n{}",
            crate::shortcuts::HELP
        );
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_loader;

    view! {
        <Title text="Portfolio" />
        <Loader phase=loader />
        <Hero />
        <About />
        <Skills />
        <ProjectsSection />
        <ContactSection />
    }
}

#[component]
fn Loader(phase: ReadSignal<LoaderPhase>) -> impl IntoView {
    view! {
        <div
            id="loader"
            class=move || match phase.get() {
                LoaderPhase::Visible => "loader",
                LoaderPhase::FadingOut | LoaderPhase::Gone => "loader fade-out",
            }
            style:display=move || if phase.get() == LoaderPhase::Gone { "none" } else { "flex" }
        >
            <div class="loader-spinner"></div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let (typed, set_typed) = signal(String::new());
    let (scroll, set_scroll) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let phrases = content.phrases.clone();
        Effect::new(move |_| match TypingAnimator::new(phrases.clone(), TypingPace::default()) {
            Ok(animator) => animator.start(Rc::new(TimeoutScheduler), move |text| {
                set_typed.set(text.to_string())
            }),
            Err(e) => log::warn!("typing animation disabled: {e}"),
        });
        let _ = use_event_listener(window(), leptos::ev::scroll, move |_| {
            set_scroll.set(crate::browser::scroll_y())
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_typed, set_scroll);

    view! {
        <section id="home" class="hero">
            <div
                class="hero-particles"
                style:transform=move || parallax_transform(scroll.get())
            ></div>
            <div class="hero-content">
                <h1 class="hero-title fade-in-up">
                    "Hi, I'm " <span class="highlight">{content.name.clone()}</span>
                </h1>
                <h2 class="hero-subtitle">
                    <span id="typed-text">{move || typed.get()}</span>
                    <span class="cursor">"|"</span>
                </h2>
                <p class="hero-description fade-in-up">{content.tagline.clone()}</p>
                <div class="hero-buttons fade-in-up">
                    <a href="#projects" class="btn btn-primary">
                        "View My Work"
                    </a>
                    <a href=RESUME_PATH download=file_name(&content) class="btn btn-secondary">
                        <i class="fas fa-download"></i>
                        " Download Resume"
                    </a>
                </div>
                <div class="hero-social">
                    {content
                        .socials
                        .iter()
                        .cloned()
                        .map(|social| view! { <SocialLink social /> })
                        .collect_view()}
                </div>
            </div>
            <div class="hero-image fade-in-right">
                <HeroPhoto />
            </div>
        </section>
    }
}

#[component]
fn HeroPhoto() -> impl IntoView {
    let (photo, set_photo) = signal(None::<String>);

    let on_click = move |_: leptos::ev::MouseEvent| open_photo_picker(set_photo);

    view! {
        <div
            class="photo-placeholder"
            style:background-image=move || photo_background(photo.get().as_deref())
            style:background-size="cover"
            style:background-position="center"
            on:click=on_click
        >
            <Show when=move || photo.get().is_none()>
                <i class="fas fa-user"></i>
                <p>{PHOTO_PROMPT}</p>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn open_photo_picker(set_photo: WriteSignal<Option<String>>) {
    if let Err(e) = crate::browser::pick_photo(move |url| set_photo.set(Some(url))) {
        log::warn!("couldn't open the photo picker: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn open_photo_picker(_: WriteSignal<Option<String>>) {}

#[component]
fn SocialLink(social: Social) -> impl IntoView {
    let (hovering, set_hovering) = signal(false);
    let (shown, set_shown) = signal(false);
    let label = tooltip_label(&social.icon);
    let on_enter = move |_| {
        set_hovering.set(true);
        TimeoutScheduler.schedule(
            TOOLTIP_DELAY,
            Box::new(move || {
                if hovering.get_untracked() {
                    set_shown.set(true);
                }
            }),
        );
    };
    let on_leave = move |_| {
        set_hovering.set(false);
        set_shown.set(false);
    };
    view! {
        <a
            href=social.url
            target="_blank"
            rel="noopener noreferrer"
            class="social-link"
            aria-label=label.clone()
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <i class=social.icon></i>
            <Show when=move || hovering.get()>
                <div class="tooltip" style:opacity=move || if shown.get() { "1" } else { "0" }>
                    {label.clone()}
                </div>
            </Show>
        </a>
    }
}

#[component]
fn About() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    view! {
        <section id="about" class="about">
            <h2 class="section-title fade-in-up">"About Me"</h2>
            <div class="about-content">
                <div class="about-text fade-in-left">
                    {content
                        .about
                        .iter()
                        .map(|p| view! { <p>{p.clone()}</p> })
                        .collect_view()}
                </div>
                <div class="about-stats fade-in-right">
                    {content
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <span class="stat-number" data-target=stat.target.to_string()>
                                        "0"
                                    </span>
                                    <span class="stat-label">{stat.label.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    view! {
        <section id="skills" class="skills">
            <h2 class="section-title fade-in-up">"Skills"</h2>
            <div class="skills-grid">
                {content
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="skill fade-in-up">
                                <div class="skill-header">
                                    <span>{skill.name.clone()}</span>
                                    <span>{format!("{}%", skill.percent)}</span>
                                </div>
                                <div class="skill-bar">
                                    <div
                                        class="skill-progress"
                                        data-width=skill.percent.to_string()
                                        style="width: 0%"
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
