pub mod components;
pub mod utils;
pub mod view_model;

use leptos::*;

use crate::components::footer::Footer;
use crate::components::hire_button::FloatingHireButton;
use crate::components::navbar::Navbar;
use components::{About, Contact, Hero, Projects};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
            <FloatingHireButton/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::navbar::NAV_SECTIONS;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_page_renders_every_spied_section() {
        let html = render_to_string(|| view! { <HomePage/> });
        for id in NAV_SECTIONS {
            assert!(
                html.contains(&format!("id=\"{id}\"")),
                "missing section {id}"
            );
        }
    }
}
