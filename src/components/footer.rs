use chrono::Datelike;
use leptos::*;

use crate::data;
use crate::utils::scroll::scroll_to_top;

#[component]
pub fn Footer() -> impl IntoView {
    let personal = &data::portfolio().personal;
    let social = &data::portfolio().social;
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-surface-elevated border-t border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-fg-muted">
                        {format!("© {year} {}", personal.name)}
                    </span>
                    <div class="flex items-center space-x-4">
                        <a
                            href=social.github.clone()
                            class="text-fg-muted hover:text-action-primary-bg"
                            aria-label="GitHub"
                        >
                            <i class="fab fa-github text-lg"></i>
                        </a>
                        <a
                            href=social.linkedin.clone()
                            class="text-fg-muted hover:text-action-primary-bg"
                            aria-label="LinkedIn"
                        >
                            <i class="fab fa-linkedin text-lg"></i>
                        </a>
                        <a
                            href=format!("mailto:{}", social.email)
                            class="text-fg-muted hover:text-action-primary-bg"
                            aria-label="Email"
                        >
                            <i class="fas fa-envelope text-lg"></i>
                        </a>
                        <button
                            type="button"
                            class="ml-4 inline-flex items-center gap-1 text-sm text-fg-muted hover:text-action-primary-bg"
                            on:click=move |_| scroll_to_top()
                        >
                            <i class="fas fa-arrow-up"></i>
                            "Back to top"
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn footer_carries_the_copyright_and_top_link() {
        let html = render_to_string(|| view! { <Footer/> });
        assert!(html.contains(&data::portfolio().personal.name));
        assert!(html.contains("Back to top"));
        assert!(html.contains(&chrono::Utc::now().year().to_string()));
    }
}
