use crate::state::theme::{provide_theme, use_theme, Theme};
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();

    let on_click = move |_| {
        theme_state.toggle();
    };

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-12 items-center rounded-full bg-surface-muted p-1 transition-colors focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:ring-offset-2"
            on:click=on_click
            aria-label=move || {
                if current_theme.get() == Theme::Dark {
                    "Switch to light mode"
                } else {
                    "Switch to dark mode"
                }
            }
        >
            <span class="sr-only">"Toggle theme"</span>

            <span
                class=move || {
                    let position = if current_theme.get() == Theme::Dark {
                        "translate-x-6"
                    } else {
                        "translate-x-0"
                    };
                    format!("inline-flex h-4 w-4 items-center justify-center transform rounded-full bg-surface-elevated transition-transform shadow-theme-switch {position}")
                }
            >
                <Show
                    when=move || current_theme.get() == Theme::Dark
                    fallback=|| view! { <i class="fas fa-sun text-[10px] text-accent-sun"></i> }
                >
                    <i class="fas fa-moon text-[10px] text-accent-moon"></i>
                </Show>
            </span>
        </button>
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let _theme_state = provide_theme();

    view! { <>{children()}</> }
}
