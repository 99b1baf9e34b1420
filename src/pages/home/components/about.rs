use leptos::*;

use crate::components::common::SectionHeading;
use crate::data::{self, Skill};

/// Groups skills by category, preserving both first-seen category order and
/// skill order within each category.
pub fn skills_by_category(skills: &[Skill]) -> Vec<(String, Vec<Skill>)> {
    let mut grouped: Vec<(String, Vec<Skill>)> = Vec::new();
    for skill in skills {
        match grouped.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, bucket)) => bucket.push(skill.clone()),
            None => grouped.push((skill.category.clone(), vec![skill.clone()])),
        }
    }
    grouped
}

#[component]
pub fn About() -> impl IntoView {
    let about = &data::portfolio().about;
    let grouped = skills_by_category(&data::portfolio().skills);
    let experience = data::portfolio().experience.clone();

    view! {
        <section id="about" class="py-16 sm:py-20 bg-surface-muted transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-12 sm:space-y-16">
                <SectionHeading title="About Me" subtitle=about.intro.clone()/>

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16">
                    <div class="space-y-6">
                        <h3 class="text-xl sm:text-2xl font-bold text-fg">"Highlights"</h3>
                        <ul class="space-y-3">
                            {about
                                .highlights
                                .iter()
                                .map(|highlight| {
                                    view! {
                                        <li class="flex items-start gap-3 text-fg-muted">
                                            <i class="fas fa-check text-action-primary-bg mt-1"></i>
                                            {highlight.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>

                        <h3 class="text-xl sm:text-2xl font-bold text-fg pt-6">"Experience"</h3>
                        <ol class="space-y-6 border-l-2 border-border pl-6">
                            {experience
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <li class="space-y-1">
                                            <p class="text-xs font-bold text-action-primary-bg uppercase tracking-wider">
                                                {entry.period}
                                            </p>
                                            <p class="text-lg font-semibold text-fg">{entry.title}</p>
                                            <p class="text-sm text-fg-muted">{entry.company}</p>
                                            <p class="text-sm text-fg-muted">{entry.description}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </div>

                    <div class="space-y-8">
                        {grouped
                            .into_iter()
                            .map(|(category, skills)| {
                                let count = skills.len();
                                view! {
                                    <div class="space-y-4">
                                        <div class="flex items-baseline justify-between">
                                            <h4 class="font-semibold text-base text-fg">{category}</h4>
                                            <span class="text-xs text-fg-muted">
                                                {format!("{count} skills")}
                                            </span>
                                        </div>
                                        {skills
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="space-y-1">
                                                        <div class="flex justify-between text-sm">
                                                            <span class="text-fg">{skill.name.clone()}</span>
                                                            <span class="text-fg-muted">{format!("{}%", skill.level)}</span>
                                                        </div>
                                                        <div class="h-2 rounded-full bg-surface-elevated overflow-hidden">
                                                            <div
                                                                class="h-full rounded-full bg-action-primary-bg"
                                                                style=format!("width: {}%", skill.level)
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.into(),
            level: 50,
            category: category.into(),
        }
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let skills = [
            skill("HTML", "Frontend"),
            skill("Django", "Backend"),
            skill("CSS", "Frontend"),
            skill("Git", "Tools"),
        ];
        let grouped = skills_by_category(&skills);
        let categories: Vec<&str> = grouped.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(categories, ["Frontend", "Backend", "Tools"]);
        assert_eq!(grouped[0].1.len(), 2);
        assert_eq!(grouped[0].1[1].name, "CSS");
    }

    #[test]
    fn grouping_empty_input_is_empty() {
        assert!(skills_by_category(&[]).is_empty());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn about_lists_every_skill_category() {
        let html = render_to_string(|| view! { <About/> });
        assert!(html.contains("id=\"about\""));
        for (category, _) in skills_by_category(&data::portfolio().skills) {
            assert!(html.contains(&category), "missing category {category}");
        }
    }
}
