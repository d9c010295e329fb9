use leptos::{either::Either, prelude::*};
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use crate::nav::{MobileMenu, NavBackground, Route, Section};

use super::use_theme;

/// Smoothly scrolls the page to `section`. Missing sections are logged and skipped.
pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section {section}");
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Navigation(on_toggle_theme: Callback<()>) -> impl IntoView {
    let (_, y) = use_window_scroll();
    let background = Memo::new(move |_| NavBackground::from_scroll(y.get()));
    let (menu, set_menu) = signal(MobileMenu::default());
    let theme = use_theme();
    let location = use_location();
    let on_home = Memo::new(move |_| Route::from_path(&location.pathname.get()) == Route::Home);

    let go_to = move |section: Section| {
        set_menu.update(MobileMenu::close);
        scroll_to_section(section);
    };

    let desktop_links = move || {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button
                        on:click=move |_| go_to(section)
                        class="text-gray-300 hover:text-white transition-colors"
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let mobile_links = move || {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button
                        on:click=move |_| go_to(section)
                        class="block w-full text-left px-3 py-2 text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                background.get().class(),
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A
                        href="/"
                        attr:class="text-2xl font-bold hover:text-cyan-400 transition-colors"
                    >
                        "Portfolio"
                    </A>

                    <div class="flex items-center space-x-4 md:space-x-8">
                        <Show when=move || on_home.get()>
                            <div class="hidden md:flex items-center space-x-8">
                                {desktop_links}
                            </div>
                        </Show>
                        <button
                            on:click=move |_| on_toggle_theme.run(())
                            class="p-2 rounded-md hover:bg-gray-700 transition-colors"
                            aria-label="Toggle theme"
                        >
                            {move || theme.get().toggle_icon()}
                        </button>
                        <Show when=move || on_home.get()>
                            <button
                                on:click=move |_| set_menu.update(MobileMenu::toggle)
                                class="md:hidden p-2 rounded-md text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                aria-label="Toggle menu"
                            >
                                <svg
                                    class="h-6 w-6"
                                    fill="none"
                                    viewBox="0 0 24 24"
                                    stroke="currentColor"
                                >
                                    {move || {
                                        if menu.get().is_open() {
                                            Either::Left(
                                                view! {
                                                    <path
                                                        stroke-linecap="round"
                                                        stroke-linejoin="round"
                                                        stroke-width="2"
                                                        d="M6 18L18 6M6 6l12 12"
                                                    />
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    <path
                                                        stroke-linecap="round"
                                                        stroke-linejoin="round"
                                                        stroke-width="2"
                                                        d="M4 6h16M4 12h16M4 18h16"
                                                    />
                                                },
                                            )
                                        }
                                    }}
                                </svg>
                            </button>
                        </Show>
                    </div>
                </div>

                <Show when=move || on_home.get() && menu.get().is_open()>
                    <div class="md:hidden bg-gray-800 border-t border-gray-700">
                        <div class="px-2 pt-2 pb-3 space-y-1">{mobile_links}</div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
