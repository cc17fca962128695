mod contact;
mod header;
mod homepage;
mod projects;

use chrono::DateTime;
use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SiteContent;
use crate::resume::{file_name, RESUME_PATH};
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="light-theme">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Err(e) = crate::browser::install_global_handlers() {
            log::warn!("couldn't install page handlers: {e:?}");
        }
    });

    let content = match SiteContent::load() {
        Ok(content) => content,
        Err(e) => {
            log::error!("{e}");
            return Either::Right(view! {
                <main class="flex flex-col flex-grow justify-center items-center">
                    <p>"This page couldn't be loaded."</p>
                </main>
            });
        }
    };
    let name = content.name.clone();
    provide_context(content);

    Either::Left(view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Header />
            <main class="flex flex-col flex-grow">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    })
}

#[component]
fn Footer() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok();
    let year = built
        .map(|t| t.format("%Y").to_string())
        .unwrap_or_default();
    let built = built
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    view! {
        <footer class="footer">
            <p>{format!("© {year} {}", content.name)}</p>
            <p class="text-muted">
                <a href=RESUME_PATH download=file_name(&content)>
                    "Download résumé"
                </a>
                {format!(" · built {built}")}
            </p>
        </footer>
    }
}
