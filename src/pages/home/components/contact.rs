use leptos::*;

use crate::components::common::{Button, SectionHeading};
use crate::config;
use crate::data;
use crate::pages::home::view_model::{use_contact_view_model, ContactViewModel, SubmitPhase};

#[component]
pub fn Contact() -> impl IntoView {
    let vm = use_contact_view_model();
    let personal = &data::portfolio().personal;
    let social = &data::portfolio().social;

    view! {
        <section id="contact" class="py-16 sm:py-20 bg-surface transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-12 sm:space-y-16">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="I'm always open to discussing new opportunities, creative projects, or just having a chat about technology."
                />

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16">
                    <div class="space-y-6 sm:space-y-8">
                        <h3 class="text-xl sm:text-2xl font-bold text-fg">
                            "Let's start a conversation"
                        </h3>

                        <div class="space-y-4">
                            <ContactInfoRow
                                icon="fas fa-envelope"
                                label="Email"
                                value=config::contact_email()
                                href=format!("mailto:{}", config::contact_email())
                            />
                            <ContactInfoRow
                                icon="fas fa-phone"
                                label="Phone"
                                value=personal.phone.clone()
                                href=format!("tel:{}", personal.phone)
                            />
                            <ContactInfoRow
                                icon="fas fa-location-dot"
                                label="Location"
                                value=personal.location.clone()
                                href="#".to_string()
                            />
                        </div>

                        <div class="pt-6">
                            <h4 class="text-base sm:text-lg font-semibold text-fg mb-4">
                                "Follow me on social media"
                            </h4>
                            <div class="flex space-x-4">
                                <a
                                    href=social.github.clone()
                                    class="p-3 bg-surface-muted rounded-lg hover:bg-action-ghost-bg-hover"
                                    aria-label="GitHub"
                                >
                                    <i class="fab fa-github text-xl text-action-primary-bg"></i>
                                </a>
                                <a
                                    href=social.linkedin.clone()
                                    class="p-3 bg-surface-muted rounded-lg hover:bg-action-ghost-bg-hover"
                                    aria-label="LinkedIn"
                                >
                                    <i class="fab fa-linkedin text-xl text-action-primary-bg"></i>
                                </a>
                            </div>
                        </div>
                    </div>

                    <ContactFormPanel vm/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfoRow(
    icon: &'static str,
    label: &'static str,
    value: String,
    href: String,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="flex items-center space-x-4 p-4 bg-surface-muted rounded-lg hover:bg-action-ghost-bg-hover transition-colors duration-300 group"
        >
            <div class="p-3 bg-surface-elevated rounded-lg">
                <i class=format!("{icon} text-action-primary-bg")></i>
            </div>
            <div>
                <p class="text-xs sm:text-sm font-medium text-fg-muted">{label}</p>
                <p class="text-base sm:text-lg font-semibold text-fg">{value}</p>
            </div>
        </a>
    }
}

#[component]
fn ContactFormPanel(vm: ContactViewModel) -> impl IntoView {
    let submitting = move || vm.phase.get() == SubmitPhase::Submitting;
    let submitted = move || vm.phase.get() == SubmitPhase::Submitted;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div>
            <form on:submit=on_submit class="space-y-4 sm:space-y-6" novalidate=true>
                <div class="grid sm:grid-cols-2 gap-4 sm:gap-6">
                    <FormField
                        label="Full Name"
                        error=Signal::derive(move || vm.errors.get().name)
                    >
                        <input
                            type="text"
                            class="w-full px-4 py-3 border border-border rounded-lg bg-surface-elevated text-fg text-sm sm:text-base focus:ring-2 focus:ring-action-primary-focus"
                            placeholder="Your full name"
                            prop:value=move || vm.name.get()
                            on:input=move |ev| vm.edit_name(event_target_value(&ev))
                        />
                    </FormField>

                    <FormField
                        label="Email Address"
                        error=Signal::derive(move || vm.errors.get().email)
                    >
                        <input
                            type="email"
                            class="w-full px-4 py-3 border border-border rounded-lg bg-surface-elevated text-fg text-sm sm:text-base focus:ring-2 focus:ring-action-primary-focus"
                            placeholder="your@email.com"
                            prop:value=move || vm.email.get()
                            on:input=move |ev| vm.edit_email(event_target_value(&ev))
                        />
                    </FormField>
                </div>

                <FormField
                    label="Message"
                    error=Signal::derive(move || vm.errors.get().message)
                >
                    <textarea
                        rows=6
                        class="w-full px-4 py-3 border border-border rounded-lg bg-surface-elevated text-fg resize-none text-sm sm:text-base focus:ring-2 focus:ring-action-primary-focus"
                        placeholder="Tell me about your project or just say hello..."
                        prop:value=move || vm.message.get()
                        on:input=move |ev| vm.edit_message(event_target_value(&ev))
                    ></textarea>
                </FormField>

                <Button
                    class="w-full"
                    loading=Signal::derive(submitting)
                    attr:type="submit"
                >
                    <i class="fas fa-paper-plane mr-2"></i>
                    "Send Message"
                </Button>
            </form>

            <Show when=submitted>
                <div class="mt-6 p-4 bg-status-success-bg border border-status-success-border rounded-lg flex items-center space-x-3">
                    <i class="fas fa-circle-check text-status-success-text text-xl"></i>
                    <div>
                        <p class="font-semibold text-sm sm:text-base text-status-success-text">
                            "Message sent successfully!"
                        </p>
                        <p class="text-xs sm:text-sm text-status-success-text">
                            "I'll get back to you as soon as possible."
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FormField(
    label: &'static str,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg-muted mb-2">{label}</label>
            {children()}
            <Show when=move || error.get().is_some()>
                <p class="text-status-error-text text-sm mt-1">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn contact_section_renders_form_and_info() {
        let html = render_to_string(|| view! { <Contact/> });
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("Send Message"));
        assert!(html.contains("Full Name"));
        assert!(html.contains(&data::portfolio().personal.phone));
    }

    #[test]
    fn success_banner_is_absent_until_submission() {
        let html = render_to_string(|| view! { <Contact/> });
        assert!(!html.contains("Message sent successfully"));
    }
}
