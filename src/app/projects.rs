use std::rc::Rc;

use leptos::prelude::*;

use crate::content::{Project, SiteContent};
use crate::effects::{CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM};
use crate::filter::{CardState, ProjectFilter, ALL};
use crate::schedule::TimeoutScheduler;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let states = content
        .projects
        .iter()
        .map(|_| RwSignal::new(CardState::Shown))
        .collect::<Vec<_>>();
    let (active, set_active) = signal(ALL.to_string());

    let listener_states = states.clone();
    let filter = StoredValue::new_local(ProjectFilter::new(
        content.projects.iter().map(|p| p.category.clone()).collect(),
        Rc::new(TimeoutScheduler),
        move |i, state| {
            if let Some(card) = listener_states.get(i) {
                card.set(state);
            }
        },
    ));

    let select = move |category: String| {
        filter.with_value(|f| f.select(&category));
        set_active.set(category);
    };

    let buttons = std::iter::once(ALL.to_string())
        .chain(content.categories())
        .map(|category| {
            let label = if category == ALL {
                "All".to_string()
            } else {
                category.to_uppercase()
            };
            let data_filter = category.clone();
            let is_active = {
                let category = category.clone();
                move || active.get() == category
            };
            view! {
                <button
                    class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                    data-filter=data_filter
                    on:click=move |_| select(category.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let cards = content
        .projects
        .iter()
        .cloned()
        .zip(states)
        .map(|(project, state)| view! { <ProjectCard project state /> })
        .collect_view();

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title fade-in-up">"Projects"</h2>
            <div class="project-filters fade-in-up">{buttons}</div>
            <div class="projects-grid">{cards}</div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, state: RwSignal<CardState>) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    view! {
        <div
            class=move || {
                if state.get().is_hidden() { "project-card hidden" } else { "project-card" }
            }
            data-category=project.category.clone()
            style:display=move || {
                if state.get() == CardState::Collapsed { "none" } else { "block" }
            }
            style:transform=move || {
                if hovered.get() { CARD_HOVER_TRANSFORM } else { CARD_REST_TRANSFORM }
            }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <h3 class="project-title">{project.title.clone()}</h3>
            <p class="project-description">{project.description.clone()}</p>
            <div class="project-tags">
                {project
                    .tags
                    .iter()
                    .map(|t| view! { <span class="tag">{t.clone()}</span> })
                    .collect_view()}
            </div>
            {project
                .link
                .clone()
                .map(|link| {
                    view! {
                        <a href=link target="_blank" rel="noopener noreferrer" class="project-link">
                            <i class="fab fa-github"></i>
                            " Code"
                        </a>
                    }
                })}
        </div>
    }
}
