use leptos::{html::Div, prelude::*};
use leptos_router::components::A;

use crate::content::{Project, CONTENT};
use crate::nav::{Route, Section};

use super::entrance::{entrance_class, use_entrance};

const CARD_TECH_LIMIT: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let title_ref = NodeRef::<Div>::new();
    let entered = use_entrance(title_ref);
    let (show_all, set_show_all) = signal(false);

    view! {
        <section id=Section::Projects.id() class="py-20 relative">
            <div class="max-w-6xl mx-auto px-4">
                <div
                    node_ref=title_ref
                    class=move || entrance_class(entered.get(), "text-center mb-16")
                >
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-600 bg-clip-text text-transparent">
                            "My Projects"
                        </span>
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-600 mx-auto mb-6"></div>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "Here are some of my recent projects that showcase my skills and expertise"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || CONTENT.gallery(show_all.get()).iter().enumerate()
                        key=|(_, project)| project.id
                        children=move |(index, project)| view! { <ProjectCard project index /> }
                    />
                </div>

                <div class="text-center mt-12">
                    <button
                        on:click=move |_| set_show_all.update(|s| *s = !*s)
                        class=move || {
                            if show_all.get() {
                                "px-8 py-4 border-2 border-gray-500 text-gray-500 rounded-full font-semibold hover:bg-gray-500 hover:text-white transition-all duration-300 transform hover:scale-105"
                            } else {
                                "px-8 py-4 border-2 border-cyan-500 text-cyan-500 rounded-full font-semibold hover:bg-cyan-500 hover:text-gray-900 transition-all duration-300 transform hover:scale-105"
                            }
                        }
                    >
                        {move || if show_all.get() { "Show Less" } else { "View All Projects" }}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<Div>::new();
    let entered = use_entrance(card_ref);
    let delay = if index % 2 == 0 { "delay-100" } else { "delay-300" };
    let (techs, more) = project.technology_preview(CARD_TECH_LIMIT);

    view! {
        <div node_ref=card_ref class=move || entrance_class(entered.get(), delay)>
            <div class="group relative bg-gray-800/50 backdrop-blur-sm rounded-xl border border-gray-700 overflow-hidden hover:border-cyan-400 transition-all duration-500 transform hover:scale-105">
                <div class="relative overflow-hidden">
                    <img
                        src=project.cover().unwrap_or_default()
                        alt=project.title.as_str()
                        class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500"
                    />
                    {project
                        .featured
                        .then(|| {
                            view! {
                                <div class="absolute top-4 left-4 bg-gradient-to-r from-cyan-400 to-blue-600 text-white px-3 py-1 rounded-full text-sm font-medium">
                                    "Featured"
                                </div>
                            }
                        })}
                </div>

                <div class="p-6">
                    <h3 class="text-xl font-bold text-white mb-2 group-hover:text-cyan-400 transition-colors duration-300">
                        {project.title.as_str()}
                    </h3>
                    <p class="text-gray-400 mb-4 line-clamp-3">
                        {project.short_description.as_str()}
                    </p>

                    <div class="flex flex-wrap gap-2 mb-4">
                        {techs
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-700/50 text-cyan-400 rounded-full text-sm font-medium">
                                        {tech.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                        {(more > 0)
                            .then(|| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-700/50 text-gray-400 rounded-full text-sm font-medium">
                                        {format!("+{more} more")}
                                    </span>
                                }
                            })}
                    </div>

                    <div class="flex items-center justify-between">
                        {Route::ProjectDetail(project.id)
                            .href()
                            .map(|href| {
                                view! {
                                    <A
                                        href=href
                                        attr:class="inline-flex items-center px-4 py-2 bg-gradient-to-r from-cyan-500 to-blue-600 text-white rounded-lg font-medium hover:from-cyan-400 hover:to-blue-500 transition-all duration-300 transform hover:scale-105"
                                    >
                                        "View Details"
                                    </A>
                                }
                            })}
                        <div class="flex space-x-2">
                            <a
                                href=project.live_link.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 text-gray-400 hover:text-cyan-400 transition-colors duration-300"
                                title="Live Demo"
                            >
                                "🔗"
                            </a>
                            <a
                                href=project.github_link.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 text-gray-400 hover:text-cyan-400 transition-colors duration-300"
                                title="GitHub"
                            >
                                "🐙"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
