//! About-card profile configuration.

use serde::{Deserialize, Serialize};

/// Which icon a social link renders with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Email,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::Email => "Email",
        }
    }

    /// Mail links stay in the current tab.
    pub fn opens_new_tab(&self) -> bool {
        !matches!(self, SocialKind::Email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

impl SocialLink {
    fn new(kind: SocialKind, url: &str) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }
}

/// Profile shown on the about card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub heading: String,
    pub avatar_url: String,
    pub avatar_alt: String,
    pub paragraphs: Vec<String>,
    pub socials: Vec<SocialLink>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            heading: "About Me".into(),
            avatar_url: "https://github.com/cyrixninja.png".into(),
            avatar_alt: "Profile".into(),
            paragraphs: vec![
                "I am a Full Stack Developer, Cloud Engineer, and Cybersecurity enthusiast with a strong focus on building secure and scalable backend solutions. Specializing in Python, AWS, and Azure, I design, develop, and deploy web applications that meet modern security and performance standards.".into(),
                "With a deep understanding of both front-end and back-end technologies, I create full-stack applications that integrate seamlessly with cloud services. My expertise in cloud platforms like AWS and Azure enables me to architect, automate, and optimize cloud infrastructures for reliable and scalable deployments. Additionally, my passion for cybersecurity drives me to incorporate best practices in securing applications, data, and cloud environments.".into(),
                "I am constantly expanding my knowledge in cloud computing and cybersecurity, ensuring that the solutions I provide are cutting-edge and secure. Whether it's creating a dynamic web app, deploying microservices, or safeguarding systems, I thrive on delivering high-quality results that drive innovation and trust.".into(),
            ],
            socials: vec![
                SocialLink::new(SocialKind::Github, "https://github.com/cyrixninja"),
                SocialLink::new(SocialKind::Linkedin, "https://linkedin.com/in/cyrixninja"),
                SocialLink::new(SocialKind::Email, "mailto:cyrixninja@gmail.com"),
            ],
        }
    }
}
