//! Display lists: skills, projects, and the contact form.

use serde::{Deserialize, Serialize};

/// Skill badges, rendered in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub heading: String,
    pub items: Vec<String>,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        let items = [
            "HTML", "CSS", "JavaScript", "Python", "C", "Rust", "Next.js", "Node.js", "Express",
            "MongoDB", "Git", "AWS", "Azure", "Linux",
        ];
        Self {
            heading: "Skills".into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A gallery entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
}

impl Project {
    fn new(title: &str, description: &str, image_url: &str, link: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            link: link.into(),
        }
    }
}

/// Project gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub heading: String,
    pub items: Vec<Project>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        const SOCIALIFY: &str = "image?description=1&font=Inter&language=1&name=1&owner=1&pattern=Circuit%20Board&stargazers=1&theme=Light";
        Self {
            heading: "Projects".into(),
            items: vec![
                Project::new(
                    "Lingua.BOT",
                    "LinguaBOT is a web application meticulously crafted to enhance language learning through dynamic chat sessions and quizzes.",
                    "https://raw.githubusercontent.com/cyrixninja/Lingua.BOT/refs/heads/main/screenshots/main.png",
                    "https://github.com/cyrixninja/Lingua.BOT",
                ),
                Project::new(
                    "Windows 98 Javascript",
                    "Windows 98 lookalike made using HTML and Javascript",
                    &format!("https://socialify.git.ci/cyrixninja/Windows-98-Javascript/{SOCIALIFY}"),
                    "https://cyrixninja.github.io/Windows-98-Javascript/",
                ),
                Project::new(
                    "Snack It Up",
                    "Find a Recipe and Food Chatbot Website",
                    &format!("https://socialify.git.ci/cyrixninja/Snack-It-Up/{SOCIALIFY}"),
                    "https://github.com/cyrixninja/Snack-It-Up",
                ),
                Project::new(
                    "Dragon Slayer Game",
                    "Test your wits and bravery in a quest to defeat the mighty dragon!",
                    "https://github.com/cyrixninja/DragonSlayerGame/raw/main/Screenshots/1.png",
                    "https://github.com/cyrixninja/DragonSlayerGame",
                ),
                Project::new(
                    "Repurpose.It",
                    "AI-powered Sustainable Repurposing Platform",
                    "https://github.com/cyrixninja/Repurpose.It/raw/main/screenshots/banner.png",
                    "https://github.com/cyrixninja/Repurpose.It",
                ),
                Project::new(
                    "CarbonCalc",
                    "Carbon Footprint Tracker built using ASP.NET",
                    "https://github.com/cyrixninja/CarbonCalc/raw/main/wwwroot/images/carboncalc.gif",
                    "https://github.com/cyrixninja/CarbonCalc",
                ),
            ],
        }
    }
}

/// Static contact form. Nothing is submitted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub heading: String,
    pub submit_label: String,
    /// Valid range: 1-20.
    pub message_rows: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "Contact Me".into(),
            submit_label: "Send Message".into(),
            message_rows: 4,
        }
    }
}
