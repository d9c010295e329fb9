use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use crate::carousel::Carousel;
use crate::content::Project;
use crate::nav::resolve_project;

use super::NotFound;

const FEATURES: [(&str, &str); 4] = [
    ("🎨 Modern Design", "Clean, modern interface with attention to detail"),
    ("📱 Responsive", "Fully responsive design that works on all devices"),
    ("⚡ Performance", "Optimized for speed and performance"),
    ("🔧 Maintainable", "Clean code architecture for easy maintenance"),
];

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let project = Memo::new(move |_| {
        let raw = params.read().get("id").unwrap_or_default();
        resolve_project(&raw)
    });

    move || match project.get() {
        Ok(project) => Either::Left(view! { <ProjectPage project /> }),
        Err(e) => {
            log::debug!("project detail: {e}");
            Either::Right(view! { <NotFound message="Project not found" /> })
        }
    }
}

#[component]
fn ProjectPage(project: &'static Project) -> impl IntoView {
    view! {
        <Title text=project.title.clone() />
        <div class="relative z-10 pt-20">
            <div class="max-w-6xl mx-auto px-4 py-12">
                <A
                    href="/"
                    attr:class="inline-flex items-center text-cyan-400 hover:text-cyan-300 transition-colors duration-300 mb-8"
                >
                    "← Back to Portfolio"
                </A>

                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-6xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-600 bg-clip-text text-transparent">
                            {project.title.as_str()}
                        </span>
                    </h1>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        {project.short_description.as_str()}
                    </p>
                </div>

                <ImageCarousel project />

                <div class="grid md:grid-cols-2 gap-12">
                    <div>
                        <h2 class="text-2xl font-bold mb-4 text-cyan-400">"Project Description"</h2>
                        <p class="text-gray-300 leading-relaxed mb-6">
                            {project.description.as_str()}
                        </p>

                        <h3 class="text-xl font-bold mb-4 text-cyan-400">"Technologies Used"</h3>
                        <div class="flex flex-wrap gap-3 mb-6">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-4 py-2 bg-gray-800/50 text-cyan-400 rounded-full text-sm font-medium border border-gray-700 hover:border-cyan-400 transition-colors duration-300">
                                            {tech.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <a
                                href=project.live_link.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center justify-center px-6 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 text-white rounded-lg font-medium hover:from-cyan-400 hover:to-blue-500 transition-all duration-300 transform hover:scale-105"
                            >
                                "Live Demo"
                            </a>
                            <a
                                href=project.github_link.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center justify-center px-6 py-3 border-2 border-cyan-500 text-cyan-500 rounded-lg font-medium hover:bg-cyan-500 hover:text-gray-900 transition-all duration-300 transform hover:scale-105"
                            >
                                <i class="devicon-github-plain mr-2"></i>
                                "GitHub"
                            </a>
                        </div>
                    </div>

                    <div>
                        <h2 class="text-2xl font-bold mb-4 text-cyan-400">"Project Features"</h2>
                        <div class="space-y-4">
                            {FEATURES
                                .into_iter()
                                .map(|(title, blurb)| {
                                    view! {
                                        <div class="bg-gray-800/50 p-4 rounded-lg backdrop-blur-sm border border-gray-700">
                                            <h4 class="font-semibold mb-2">{title}</h4>
                                            <p class="text-gray-400 text-sm">{blurb}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ImageCarousel(project: &'static Project) -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(project.images.len()));
    let has_controls = carousel.get_untracked().has_controls();

    let image = move || {
        let index = carousel.get().index();
        let src = project
            .images
            .get(index)
            .map(String::as_str)
            .unwrap_or_default();
        (src, format!("{} - Image {}", project.title, index + 1))
    };

    view! {
        <div class="mb-12">
            <div class="relative group">
                <div class="relative overflow-hidden rounded-xl">
                    <img
                        src=move || image().0
                        alt=move || image().1
                        class="w-full h-96 object-cover transition-transform duration-500 group-hover:scale-105"
                    />
                    {has_controls
                        .then(|| {
                            view! {
                                <button
                                    on:click=move |_| set_carousel.update(Carousel::prev)
                                    class="absolute left-4 top-1/2 transform -translate-y-1/2 w-12 h-12 bg-gray-800/80 rounded-full flex items-center justify-center text-white hover:bg-gray-700 transition-all duration-300 opacity-0 group-hover:opacity-100"
                                    aria-label="Previous image"
                                >
                                    "‹"
                                </button>
                                <button
                                    on:click=move |_| set_carousel.update(Carousel::next)
                                    class="absolute right-4 top-1/2 transform -translate-y-1/2 w-12 h-12 bg-gray-800/80 rounded-full flex items-center justify-center text-white hover:bg-gray-700 transition-all duration-300 opacity-0 group-hover:opacity-100"
                                    aria-label="Next image"
                                >
                                    "›"
                                </button>
                            }
                        })}
                </div>

                {has_controls
                    .then(|| {
                        view! {
                            <div class="flex justify-center mt-4 space-x-2">
                                {(0..project.images.len())
                                    .map(|index| {
                                        view! {
                                            <button
                                                on:click=move |_| {
                                                    set_carousel.update(|c| {
                                                        c.select(index);
                                                    })
                                                }
                                                aria-label=format!("Show image {}", index + 1)
                                                class=move || {
                                                    if carousel.get().is_current(index) {
                                                        "w-3 h-3 rounded-full transition-all duration-300 bg-cyan-400"
                                                    } else {
                                                        "w-3 h-3 rounded-full transition-all duration-300 bg-gray-600 hover:bg-gray-500"
                                                    }
                                                }
                                            ></button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
