use leptos::*;

use crate::components::common::SectionHeading;
use crate::data::{self, Project};

pub const ALL_FILTER: &str = "All";

/// Filter chips: `All` plus the distinct categories in first-seen order.
pub fn filter_chips(projects: &[Project]) -> Vec<String> {
    let mut chips = vec![ALL_FILTER.to_string()];
    for project in projects {
        if !chips.contains(&project.category) {
            chips.push(project.category.clone());
        }
    }
    chips
}

pub fn visible_projects(projects: &[Project], filter: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter == ALL_FILTER || p.category == filter)
        .cloned()
        .collect()
}

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &data::portfolio().projects;
    let chips = filter_chips(projects);
    let (filter, set_filter) = create_signal(ALL_FILTER.to_string());

    let filtered = {
        let projects = projects.clone();
        move || visible_projects(&projects, &filter.get())
    };

    view! {
        <section id="projects" class="py-16 sm:py-20 bg-surface transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-12">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A selection of things I have designed and built."
                />

                <div class="flex flex-wrap justify-center gap-3">
                    {chips
                        .into_iter()
                        .map(|chip| {
                            let label = chip.clone();
                            let value = chip.clone();
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if filter.get() == value {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-surface-muted text-fg-muted hover:text-action-primary-bg"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(chip.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid sm:grid-cols-2 gap-8">
                    <For
                        each=filtered
                        key=|project| project.id
                        children=move |project: Project| {
                            view! { <ProjectCard project/> }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let featured = project.featured;
    let card_classes = if featured {
        "group bg-surface-elevated rounded-2xl overflow-hidden shadow-lg border-2 border-action-primary-bg"
    } else {
        "group bg-surface-elevated rounded-2xl overflow-hidden shadow-lg border border-border"
    };

    view! {
        <article class=card_classes>
            <img
                src=project.image.clone()
                alt=project.title.clone()
                class="w-full h-48 object-cover"
            />
            <div class="p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="text-xl font-bold text-fg">{project.title.clone()}</h3>
                    <Show when=move || featured>
                        <span class="text-xs font-bold text-action-primary-bg uppercase tracking-wider">
                            "Featured"
                        </span>
                    </Show>
                </div>
                <p class="text-sm text-fg-muted">{project.description.clone()}</p>
                <dl class="space-y-1 text-xs text-fg-muted">
                    <div>
                        <dt class="inline font-semibold text-fg">"Challenges: "</dt>
                        <dd class="inline">{project.challenges.clone()}</dd>
                    </div>
                    <div>
                        <dt class="inline font-semibold text-fg">"Results: "</dt>
                        <dd class="inline">{project.results.clone()}</dd>
                    </div>
                </dl>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 rounded bg-surface-muted text-xs text-fg-muted">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-4 pt-2">
                    <a
                        href=project.demo_url.clone()
                        class="text-sm font-medium text-action-primary-bg hover:underline"
                    >
                        "Live Demo"
                    </a>
                    <a
                        href=project.github_url.clone()
                        class="text-sm font-medium text-fg-muted hover:text-action-primary-bg"
                    >
                        "Source"
                    </a>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            title: format!("p{id}"),
            description: String::new(),
            image: String::new(),
            technologies: vec![],
            category: category.into(),
            demo_url: String::new(),
            github_url: String::new(),
            featured: false,
            challenges: String::new(),
            results: String::new(),
        }
    }

    #[test]
    fn chips_are_all_plus_distinct_categories_in_order() {
        let projects = [project(1, "Web"), project(2, "CLI"), project(3, "Web")];
        assert_eq!(filter_chips(&projects), ["All", "Web", "CLI"]);
    }

    #[test]
    fn all_filter_keeps_everything() {
        let projects = [project(1, "Web"), project(2, "CLI")];
        assert_eq!(visible_projects(&projects, ALL_FILTER).len(), 2);
    }

    #[test]
    fn category_filter_is_exact() {
        let projects = [project(1, "Web"), project(2, "CLI"), project(3, "Web")];
        let visible = visible_projects(&projects, "Web");
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == "Web"));
        assert!(visible_projects(&projects, "Embedded").is_empty());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn projects_section_lists_every_project_title() {
        let html = render_to_string(|| view! { <Projects/> });
        assert!(html.contains("id=\"projects\""));
        for project in &data::portfolio().projects {
            assert!(html.contains(&project.title), "missing {}", project.title);
        }
    }
}
