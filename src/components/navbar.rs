use leptos::*;

use crate::components::theme::ThemeToggle;
use crate::state::scroll_spy::{use_scroll_position, use_scroll_spy};
use crate::utils::scroll::scroll_to_section;

/// Section ids in page order. Order doubles as scroll-spy priority.
pub const NAV_SECTIONS: &[&str] = &["home", "about", "projects", "contact"];

/// Activation threshold, px from the viewport top.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

/// Past this scroll offset the bar swaps to its elevated background.
const SCROLLED_THRESHOLD: f64 = 20.0;

/// "home" -> "Home" for nav labels.
pub fn nav_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let active_section = use_scroll_spy(NAV_SECTIONS, SCROLL_SPY_OFFSET);
    let scroll_position = use_scroll_position();
    let is_scrolled = move || scroll_position.get() > SCROLLED_THRESHOLD;

    let navigate = move |id: &'static str| {
        scroll_to_section(id);
        set_menu_open.set(false);
    };

    let bar_classes = move || {
        if is_scrolled() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-surface-elevated/80 backdrop-blur-md shadow-lg"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <nav class=bar_classes>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        type="button"
                        class="flex items-center space-x-2 cursor-pointer"
                        on:click=move |_| navigate("home")
                    >
                        <i class="fas fa-code text-2xl text-action-primary-bg"></i>
                        <span class="text-xl font-bold text-fg">
                            "AM " <span class="text-action-primary-bg">"(Mikey)"</span>
                        </span>
                    </button>

                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_SECTIONS
                            .iter()
                            .map(|&id| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if active_section.get() == Some(id) {
                                                "relative px-3 py-2 text-sm font-medium text-action-primary-bg border-b-2 border-action-primary-bg"
                                            } else {
                                                "relative px-3 py-2 text-sm font-medium text-fg-muted hover:text-action-primary-bg"
                                            }
                                        }
                                        on:click=move |_| navigate(id)
                                    >
                                        {nav_label(id)}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle/>
                    </div>

                    <div class="md:hidden flex items-center space-x-4">
                        <ThemeToggle/>
                        <button
                            type="button"
                            class="text-fg-muted hover:text-action-primary-bg focus:outline-none"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-expanded=move || menu_open.get()
                            aria-label="Toggle menu"
                        >
                            <Show
                                when=move || menu_open.get()
                                fallback=|| view! { <i class="fas fa-bars text-xl"></i> }
                            >
                                <i class="fas fa-times text-xl"></i>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-surface-elevated/95 backdrop-blur-md shadow-lg">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {NAV_SECTIONS
                            .iter()
                            .map(|&id| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if active_section.get() == Some(id) {
                                                "block w-full text-left px-3 py-2 text-base font-medium text-action-primary-bg bg-action-ghost-bg-hover"
                                            } else {
                                                "block w-full text-left px-3 py-2 text-base font-medium text-fg-muted hover:text-action-primary-bg hover:bg-action-ghost-bg-hover"
                                            }
                                        }
                                        on:click=move |_| navigate(id)
                                    >
                                        {nav_label(id)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels_capitalize_the_first_letter() {
        assert_eq!(nav_label("home"), "Home");
        assert_eq!(nav_label("about"), "About");
        assert_eq!(nav_label(""), "");
    }

    #[test]
    fn nav_sections_are_distinct_and_ordered() {
        let mut seen = NAV_SECTIONS.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), NAV_SECTIONS.len());
        assert_eq!(NAV_SECTIONS.first(), Some(&"home"));
        assert_eq!(NAV_SECTIONS.last(), Some(&"contact"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn navbar_renders_every_nav_label() {
        let html = render_to_string(|| view! { <Navbar/> });
        for id in NAV_SECTIONS {
            assert!(html.contains(&nav_label(id)), "missing label for {id}");
        }
    }
}
