use leptos::{html::Div, prelude::*};

use crate::content::CONTENT;
use crate::nav::Section;

use super::entrance::{entrance_class, use_entrance};

const HIGHLIGHTS: [&str; 8] = [
    "React",
    "JavaScript",
    "TypeScript",
    "Figma",
    "Photoshop",
    "Illustrator",
    "Wireframing",
    "Design Systems",
];

#[component]
pub fn About() -> impl IntoView {
    let info = &CONTENT.personal;
    let content_ref = NodeRef::<Div>::new();
    let entered = use_entrance(content_ref);

    view! {
        <section id=Section::About.id() class="py-20 relative">
            <div class="max-w-6xl mx-auto px-4">
                <div node_ref=content_ref class=move || entrance_class(entered.get(), "")>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold mb-4">
                            <span class="bg-gradient-to-r from-cyan-400 to-blue-600 bg-clip-text text-transparent">
                                "About Me"
                            </span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-600 mx-auto"></div>
                    </div>

                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div class="relative group">
                            <div class="absolute inset-0 bg-gradient-to-r from-cyan-400 to-blue-600 rounded-lg transform rotate-6 group-hover:rotate-12 transition-transform duration-500"></div>
                            <img
                                src="/pp.PNG"
                                alt=info.name.as_str()
                                class="relative w-full h-96 object-cover rounded-lg shadow-xl transform group-hover:scale-105 transition-transform duration-500"
                            />
                        </div>

                        <div class="space-y-6 text-gray-300">
                            <p class="text-lg leading-relaxed">
                                {format!(
                                    "Hello! I'm {}, a passionate {}, based in {}. I specialize in creating beautiful, functional, and user-centered digital experiences.",
                                    info.name,
                                    info.title,
                                    info.location,
                                )}
                            </p>
                            <p class="text-lg leading-relaxed">
                                "With expertise in modern web technologies, I enjoy solving complex problems and bringing creative ideas to life through code. I'm always eager to learn new technologies and push the boundaries of what's possible on the web."
                            </p>
                            <p class="text-lg leading-relaxed">
                                "When I'm not coding, you can find me exploring new design trends, contributing to open-source projects, or experimenting with the latest web technologies."
                            </p>

                            <div class="flex flex-wrap gap-3 mt-8">
                                {HIGHLIGHTS
                                    .into_iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-4 py-2 bg-gray-800/50 text-cyan-400 rounded-full text-sm font-medium border border-gray-700 hover:border-cyan-400 transition-colors duration-300">
                                                {tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
