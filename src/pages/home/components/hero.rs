use leptos::*;

use crate::components::common::{Button, ButtonVariant};
use crate::config;
use crate::data;
use crate::utils::scroll::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let personal = &data::portfolio().personal;
    let social = &data::portfolio().social;

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center bg-surface overflow-hidden pt-16 md:pt-20"
        >
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="space-y-6 md:space-y-8">
                    <div class="flex justify-center">
                        <img
                            src=personal.avatar.clone()
                            alt=personal.name.clone()
                            class="w-24 h-24 sm:w-28 sm:h-28 md:w-32 md:h-32 rounded-full object-cover shadow-2xl border-4 border-surface-elevated"
                        />
                    </div>

                    <div class="space-y-4 md:space-y-6">
                        <h1 class="text-3xl sm:text-4xl md:text-5xl lg:text-7xl font-bold text-fg leading-tight px-2">
                            "Hi, I'm " <span class="text-action-primary-bg">{personal.name.clone()}</span>
                        </h1>
                        <p class="text-lg sm:text-xl md:text-2xl font-medium text-action-primary-bg px-2">
                            {personal.title.clone()}
                        </p>
                        <p class="text-base sm:text-lg md:text-xl text-fg-muted max-w-3xl mx-auto leading-relaxed px-4">
                            {personal.tagline.clone()}
                        </p>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-3 sm:gap-4 justify-center items-center px-4">
                        <a href=config::resume_url()>
                            <Button>
                                <i class="fas fa-download mr-2"></i>
                                "Download Resume"
                            </Button>
                        </a>
                        <a href=format!("mailto:{}", config::contact_email())>
                            <Button variant=ButtonVariant::Outline>
                                <i class="fas fa-envelope mr-2"></i>
                                "Hire Me"
                            </Button>
                        </a>
                    </div>

                    <div class="flex justify-center space-x-6">
                        <a
                            href=social.github.clone()
                            class="text-fg-muted hover:text-action-primary-bg transition-colors duration-300"
                            aria-label="GitHub"
                        >
                            <i class="fab fa-github text-2xl"></i>
                        </a>
                        <a
                            href=social.linkedin.clone()
                            class="text-fg-muted hover:text-action-primary-bg transition-colors duration-300"
                            aria-label="LinkedIn"
                        >
                            <i class="fab fa-linkedin text-2xl"></i>
                        </a>
                    </div>
                </div>
            </div>

            <button
                type="button"
                class="absolute bottom-6 sm:bottom-8 left-1/2 -translate-x-1/2 text-fg-muted hover:text-action-primary-bg transition-colors duration-300"
                on:click=move |_| scroll_to_section("about")
                aria-label="Scroll to about section"
            >
                <i class="fas fa-arrow-down text-xl"></i>
            </button>
        </section>
    }
}
