mod about;
mod contact;
mod entrance;
mod hero;
mod navigation;
mod project_detail;
mod projects;
mod skills;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::BackendConfig;
use crate::contact::{ContactTransport, SimulatedTransport};
use crate::content::CONTENT;
use crate::ping::spawn_ping;
use crate::theme::Theme;

use about::About;
use contact::Contact;
use hero::Hero;
use navigation::Navigation;
use project_detail::ProjectDetail;
use projects::Projects;
use skills::Skills;

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
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Read-only view of the theme handed to every component below `App`.
#[derive(Clone, Copy)]
pub struct ThemeContext(pub Signal<Theme>);

pub fn use_theme() -> Signal<Theme> {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::derive(Theme::default))
}

/// Transport the contact form submits through.
#[derive(Clone)]
pub struct TransportContext(pub Arc<dyn ContactTransport>);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // App is the only writer; descendants get the read half.
    let (theme, set_theme) = signal(Theme::default());
    provide_context(ThemeContext(theme.into()));
    provide_context(TransportContext(Arc::new(SimulatedTransport::default())));

    let toggle_theme = Callback::new(move |_: ()| set_theme.update(|t| *t = t.toggled()));

    view! {
        <Title formatter=|title| format!("{} - {title}", CONTENT.personal.name) />
        <Meta name="color-scheme" content=move || theme.get().color_scheme() />

        <Router>
            <div class=move || {
                format!("App min-h-screen relative overflow-hidden {}", theme.get().page_class())
            }>
                <Navigation on_toggle_theme=toggle_theme />
                <main class="relative z-10">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/project/:id") view=ProjectDetail />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// The single-page scroll view.
#[component]
fn HomePage() -> impl IntoView {
    Effect::new(move |_| match BackendConfig::from_build_env() {
        Ok(config) => {
            if spawn_ping(&config) {
                log::debug!("backend ping scheduled");
            }
        }
        Err(e) => log::warn!("skipping ping: {e}"),
    });

    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Skills />
        <Contact />
    }
}

#[component]
pub fn NotFound(#[prop(default = "Page not found.")] message: &'static str) -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6">
            <div class="text-xl">{message}</div>
            <A href="/" attr:class="text-cyan-400 hover:text-cyan-300 transition-colors duration-300">
                "Back to Portfolio"
            </A>
        </div>
    }
}
