use leptos::{html::Div, prelude::*};

use crate::content::CONTENT;
use crate::nav::Section;

use super::entrance::{entrance_class, use_entrance};
use super::navigation::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let info = &CONTENT.personal;
    let content_ref = NodeRef::<Div>::new();
    let entered = use_entrance(content_ref);

    view! {
        <section
            id=Section::Hero.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-blue-600/20 via-purple-600/20 to-cyan-600/20"></div>

            <div
                node_ref=content_ref
                class=move || {
                    entrance_class(entered.get(), "relative z-10 text-center max-w-4xl mx-auto px-4")
                }
            >
                <div class="mb-8">
                    <div class="relative inline-block">
                        <div class="w-32 h-32 rounded-full bg-gradient-to-br from-cyan-400 to-blue-600 p-1 mb-8 mx-auto transform hover:scale-110 transition-transform duration-300">
                            <img
                                src="/image.png"
                                alt=info.name.as_str()
                                class="w-full h-full rounded-full object-cover"
                            />
                        </div>
                        <div class="absolute -top-2 -right-2 w-8 h-8 bg-green-400 rounded-full border-4 border-gray-900 animate-pulse"></div>
                    </div>
                </div>

                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    <span class="bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 bg-clip-text text-transparent">
                        {info.name.as_str()}
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-8 font-light">
                    {info.title.as_str()}
                </p>
                <div class="max-w-2xl mx-auto mb-12">
                    <p class="text-lg text-gray-400 leading-relaxed">{info.bio.as_str()}</p>
                </div>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-12">
                    <button
                        on:click=move |_| scroll_to_section(Section::Contact)
                        class="group relative px-8 py-4 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-full font-semibold text-white transform hover:scale-105 transition-all duration-300 shadow-lg hover:shadow-cyan-500/25"
                    >
                        <span class="relative z-10">"Get In Touch"</span>
                    </button>
                    <a
                        href=info.resume_url.as_str()
                        download=info.resume_file_name()
                        class="px-8 py-4 border-2 border-cyan-500 text-cyan-500 rounded-full font-semibold hover:bg-cyan-500 hover:text-gray-900 transition-all duration-300 transform hover:scale-105"
                        aria-label="Download Resume"
                    >
                        "Download Resume"
                    </a>
                </div>

                <SocialLinks class="w-12 h-12 rounded-full bg-gray-800 flex items-center justify-center text-gray-400 hover:text-white hover:bg-cyan-500 transition-all duration-300 transform hover:scale-110" />
            </div>

            <div class="absolute top-20 left-10 w-16 h-16 bg-gradient-to-br from-cyan-400 to-blue-600 rounded-lg transform rotate-12 hover:rotate-45 transition-transform duration-500 animate-float"></div>
            <div class="absolute bottom-20 right-10 w-12 h-12 bg-gradient-to-br from-purple-400 to-pink-600 rounded-full transform hover:scale-125 transition-transform duration-500 animate-float-delay"></div>
        </section>
    }
}

/// Row of social profile links, each opening in a new tab.
#[component]
pub fn SocialLinks(class: &'static str) -> impl IntoView {
    view! {
        <div class="flex justify-center space-x-6">
            {CONTENT
                .personal
                .social
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=class
                            aria-label=link.platform.as_str()
                        >
                            {link.glyph()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
