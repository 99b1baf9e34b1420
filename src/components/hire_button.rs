use leptos::*;

use crate::config;
use crate::state::scroll_spy::use_scroll_position;
use crate::utils::scroll::scroll_to_section;

/// The button stays hidden until the reader has scrolled past this offset.
const VISIBLE_THRESHOLD: f64 = 300.0;

#[component]
pub fn FloatingHireButton() -> impl IntoView {
    let scroll_position = use_scroll_position();
    let (expanded, set_expanded) = create_signal(false);
    let is_visible = move || scroll_position.get() > VISIBLE_THRESHOLD;

    let go_to_contact = move |_| {
        scroll_to_section("contact");
        set_expanded.set(false);
    };

    view! {
        <Show when=is_visible>
            <div class="fixed bottom-4 sm:bottom-6 right-4 sm:right-6 z-40">
                <Show when=move || expanded.get()>
                    <div class="absolute bottom-16 right-0 bg-surface-elevated rounded-lg shadow-xl p-4 w-64 border border-border">
                        <button
                            type="button"
                            class="absolute top-2 right-2 text-fg-muted hover:text-fg"
                            on:click=move |_| set_expanded.set(false)
                            aria-label="Close"
                        >
                            <i class="fas fa-times text-sm"></i>
                        </button>
                        <div class="space-y-3">
                            <h4 class="font-semibold text-base text-fg">"Let's work together!"</h4>
                            <p class="text-sm text-fg-muted">
                                "I'm available for freelance projects and full-time opportunities."
                            </p>
                            <div class="space-y-2">
                                <button
                                    type="button"
                                    class="w-full flex items-center justify-center gap-2 px-3 py-2 bg-action-primary-bg text-action-primary-text rounded-lg hover:bg-action-primary-bg-hover text-sm"
                                    on:click=go_to_contact
                                >
                                    <i class="fas fa-comment-dots"></i>
                                    "Send Message"
                                </button>
                                <a
                                    href=move || format!("mailto:{}", config::contact_email())
                                    class="w-full flex items-center justify-center gap-2 px-3 py-2 border border-border text-fg-muted rounded-lg hover:bg-surface-muted text-sm"
                                >
                                    <i class="fas fa-envelope"></i>
                                    "Quick Email"
                                </a>
                            </div>
                        </div>
                    </div>
                </Show>

                <button
                    type="button"
                    class="bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text p-4 rounded-full shadow-lg hover:shadow-xl transition-all duration-300"
                    on:click=move |_| set_expanded.update(|open| *open = !*open)
                    aria-label="Hire me"
                >
                    <Show
                        when=move || expanded.get()
                        fallback=|| view! { <i class="fas fa-comment-dots text-xl"></i> }
                    >
                        <i class="fas fa-times text-xl"></i>
                    </Show>
                </button>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn hire_button_is_hidden_before_any_scrolling() {
        // On the host the scroll position reads 0, below the threshold.
        let html = render_to_string(|| view! { <FloatingHireButton/> });
        assert!(!html.contains("Hire me"));
    }
}
