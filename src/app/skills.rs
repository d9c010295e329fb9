use leptos::{either::Either, html::Div, prelude::*};

use crate::content::{Skill, SkillIcon, CONTENT};
use crate::nav::Section;

use super::entrance::{entrance_class, use_entrance};

const PRIMARY: &str = "Frontend";
const SECONDARY: &str = "Tools & Others";

fn skills_in(category: &str) -> &'static [Skill] {
    CONTENT
        .skill_category(category)
        .map(|c| c.skills.as_slice())
        .unwrap_or_default()
}

#[component]
pub fn Skills() -> impl IntoView {
    let title_ref = NodeRef::<Div>::new();
    let entered = use_entrance(title_ref);

    view! {
        <section id=Section::Skills.id() class="py-20 relative">
            <div class="max-w-6xl mx-auto px-4">
                <div
                    node_ref=title_ref
                    class=move || entrance_class(entered.get(), "text-center mb-16")
                >
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-600 bg-clip-text text-transparent">
                            "My Skills"
                        </span>
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-600 mx-auto mb-6"></div>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "Here's what I bring to the table - a diverse set of technical skills and expertise"
                    </p>
                </div>

                <div class="flex flex-col lg:flex-row gap-8 justify-center items-stretch">
                    <div class="bg-gray-800/50 rounded-2xl shadow-lg p-8 flex-1 min-w-[320px] max-w-xl border border-gray-700">
                        <h3 class="text-2xl font-bold mb-4 tracking-wide">"SKILLS"</h3>
                        <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-600 mb-8"></div>
                        <div class="grid grid-cols-2 md:grid-cols-3 gap-6">
                            {skills_in(PRIMARY)
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="flex flex-col items-center bg-gray-900/40 rounded-xl p-4 shadow-sm transition-transform duration-300 transform hover:scale-105 hover:border hover:border-cyan-400 hover:shadow-lg">
                                            <SkillBadge skill size="w-10 h-10" />
                                            <span class="font-semibold text-center text-sm tracking-wide mt-2">
                                                {skill.name.as_str()}
                                            </span>
                                            <SkillLevel skill />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="bg-gray-800/50 rounded-2xl shadow-lg p-8 flex-1 min-w-[260px] max-w-sm border border-gray-700 flex flex-col">
                        <h3 class="text-2xl font-bold mb-4 tracking-wide">"TOOLS & OTHERS"</h3>
                        <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-600 mb-8"></div>
                        <div class="flex flex-col gap-4 flex-1 justify-center">
                            {skills_in(SECONDARY)
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="bg-gray-900/40 rounded-xl py-4 px-2 flex flex-col items-center text-center font-semibold text-base tracking-wide shadow-sm transition-transform duration-300 transform hover:scale-105 hover:border hover:border-cyan-400 hover:shadow-lg">
                                            <SkillBadge skill size="w-8 h-8" />
                                            <span>{skill.name.as_str()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBadge(skill: &'static Skill, size: &'static str) -> impl IntoView {
    match skill.icon() {
        SkillIcon::Image(src) => {
            let invert = if skill.invert_icon() { " filter invert" } else { "" };
            Either::Left(view! {
                <img src=src alt=skill.name.as_str() class=format!("{size} mb-2{invert}") />
            })
        }
        SkillIcon::Glyph(glyph) => Either::Right(view! { <span class="text-4xl mb-2">{glyph}</span> }),
    }
}

/// Proficiency bar, only for skills that carry a level.
#[component]
fn SkillLevel(skill: &'static Skill) -> impl IntoView {
    skill.level.map(|level| {
        view! {
            <div class="w-full mt-3">
                <div class="flex justify-end text-xs text-cyan-400 font-bold mb-1">
                    {format!("{level}%")}
                </div>
                <div class="w-full bg-gray-700 rounded-full h-2">
                    <div
                        class="bg-gradient-to-r from-cyan-400 to-blue-600 h-2 rounded-full transition-all duration-1000 ease-out"
                        style=format!("width: {level}%")
                    ></div>
                </div>
            </div>
        }
    })
}
