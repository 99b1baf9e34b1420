use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-lg focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Outline => "border-2 border-action-primary-bg text-action-primary-bg hover:bg-action-primary-bg hover:text-action-primary-text",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-lg px-6 py-3 text-sm font-semibold transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Section header: centered title with the underline accent every section
/// shares.
#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold text-fg mb-4">{title}</h2>
            <div class="w-24 h-1 bg-action-primary-bg mx-auto mb-6 sm:mb-8"></div>
            <p class="text-base sm:text-lg text-fg-muted max-w-3xl mx-auto px-4">{subtitle}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Outline.classes().contains("border-action-primary-bg"));
        assert_ne!(ButtonVariant::Primary.classes(), ButtonVariant::Outline.classes());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn section_heading_renders_title_and_subtitle() {
        let html = render_to_string(|| {
            view! { <SectionHeading title="Get In Touch" subtitle="Say hello"/> }
        });
        assert!(html.contains("Get In Touch"));
        assert!(html.contains("Say hello"));
    }
}
