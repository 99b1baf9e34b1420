//! Static portfolio content: immutable, load-time data with no lifecycle
//! beyond read-only lookup.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar: String,
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub intro: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub demo_url: String,
    pub github_url: String,
    pub featured: bool,
    pub challenges: String,
    pub results: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub personal: Personal,
    pub about: About,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub social: Social,
}

pub fn portfolio() -> &'static PortfolioData {
    static DATA: OnceLock<PortfolioData> = OnceLock::new();
    DATA.get_or_init(default_data)
}

fn default_data() -> PortfolioData {
    PortfolioData {
        personal: Personal {
            name: "Ashan Mir".into(),
            title: "Front-End Developer".into(),
            tagline: "Turning ideas into interactive and responsive web experiences".into(),
            email: "ashanmirofficial@gmail.com".into(),
            phone: "+92-319-0799711".into(),
            location: "Islamabad, Pakistan".into(),
            avatar: "assets/profile.jpeg".into(),
            resume: "assets/resume.pdf".into(),
        },
        about: About {
            intro: "I'm a passionate junior front-end developer with a strong foundation in \
                    modern web technologies. I enjoy crafting clean, responsive, and engaging \
                    user interfaces, and I'm always eager to learn and grow in a collaborative \
                    environment."
                .into(),
            highlights: vec![
                "Proficient in HTML, CSS, JavaScript, and modern frontend frameworks".into(),
                "Strong understanding of responsive and mobile-first design".into(),
                "Built several personal and collaborative frontend projects".into(),
                "Quick learner with a passion for UI/UX best practices".into(),
            ],
        },
        skills: vec![
            skill("HTML5/CSS3", 90, "Frontend"),
            skill("JavaScript (ES6+)", 80, "Frontend"),
            skill("React.js", 80, "Frontend"),
            skill("Tailwind CSS", 85, "Frontend"),
            skill("Responsive Design", 88, "Frontend"),
            skill("Django", 50, "Backend"),
            skill("MySQL", 60, "Database"),
            skill("Git & GitHub", 75, "Tools"),
            skill("Figma/Adobe XD", 70, "Design"),
        ],
        experience: vec![
            Experience {
                title: "Frontend Professional Certification".into(),
                company: "Coursera".into(),
                period: "Dec 2024 – Jan 2025".into(),
                description: "Certified in HTML5, CSS3, JavaScript, and React.js for web \
                              development."
                    .into(),
            },
            Experience {
                title: "Freelance Projects".into(),
                company: "Self-employed – Team Work".into(),
                period: "2024 – Present".into(),
                description: "Designed and developed multiple client websites and personal \
                              projects with clean code practices and performance optimization \
                              in mind."
                    .into(),
            },
        ],
        projects: vec![
            Project {
                id: 1,
                title: "Portfolio Website".into(),
                description: "A personal portfolio built to showcase my skills, resume, and \
                              projects."
                    .into(),
                image: "https://images.pexels.com/photos/225232/pexels-photo-225232.jpeg".into(),
                technologies: vec!["Rust".into(), "Leptos".into(), "Tailwind CSS".into()],
                category: "Web".into(),
                demo_url: "#".into(),
                github_url: "https://github.com/ashanmir/portfolio".into(),
                featured: true,
                challenges: "Designed a responsive layout and integrated modular components."
                    .into(),
                results: "Improved my understanding of reusable components and responsive \
                          design."
                    .into(),
            },
            Project {
                id: 2,
                title: "Note App Project".into(),
                description: "A simple note management app to add, remove, and mark tasks."
                    .into(),
                image: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg".into(),
                technologies: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
                category: "Web".into(),
                demo_url: "#".into(),
                github_url: "https://github.com/Mikey-Here3/Note-app-Project".into(),
                featured: false,
                challenges: "Implemented dynamic DOM manipulation and localStorage persistence."
                    .into(),
                results: "Enhanced my JavaScript fundamentals and code organization skills."
                    .into(),
            },
        ],
        social: Social {
            github: "https://github.com/Mikey-Here3".into(),
            linkedin: "https://www.linkedin.com/in/ashan-a-444a35348/".into(),
            email: "ashanmirofficial@gmail.com".into(),
        },
    }
}

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        name: name.into(),
        level,
        category: category.into(),
    }
}
