//! Static portfolio content: projects, work history, education and the rest
//! of the tables rendered by the site.

use serde::Serialize;

mod data;

fn is_empty(items: &&[&str]) -> bool {
    items.is_empty()
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub video: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkExperience {
    pub id: &'static str,
    pub company: &'static str,
    pub title: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub location: &'static str,
    pub link: &'static str,
    pub accomplishments: &'static [&'static str],
}

impl WorkExperience {
    pub fn is_current(&self) -> bool {
        self.end == "Present"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub id: &'static str,
    pub school: &'static str,
    pub degree: &'static str,
    pub location: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<&'static str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub minors: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub honors: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub uid: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub id: &'static str,
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Award {
    pub id: &'static str,
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Opening line and one-click prompts shown by the chat widget
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatIntro {
    pub greeting: &'static str,
    pub suggested_questions: &'static [&'static str],
}

/// Everything the site renders, in one serialisable document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: &'static str,
    pub headline: &'static str,
    pub about: &'static [&'static str],
    pub email: &'static str,
    pub chat: ChatIntro,
    pub projects: &'static [Project],
    pub work_experience: &'static [WorkExperience],
    pub education: &'static [Education],
    pub skills: &'static [SkillGroup],
    pub blog_posts: &'static [BlogPost],
    pub social_links: &'static [SocialLink],
    pub certifications: &'static [Certification],
    pub awards: &'static [Award],
}

static PORTFOLIO: Portfolio = Portfolio {
    name: crate::knowledge::SUBJECT_NAME,
    headline: "AI & Data Consultant",
    about: &[
        "My mission is to bridge the gap between cutting-edge AI technology and practical business solutions, creating products that not only showcase technical excellence but genuinely solve real-world problems.",
        "Driving AI innovation from concept to completion. Translating customer insights into impactful products across startup and enterprise environments.",
    ],
    email: data::EMAIL,
    chat: ChatIntro {
        greeting: "👋 Hi! I'm an AI assistant that knows all about Kabeer's background, experience, and skills. Ask me anything about his resume!",
        suggested_questions: &[
            "What's his experience at EY?",
            "Tell me about his AI projects",
            "What are his technical skills?",
        ],
    },
    projects: data::PROJECTS,
    work_experience: data::WORK_EXPERIENCE,
    education: data::EDUCATION,
    skills: data::SKILLS,
    blog_posts: data::BLOG_POSTS,
    social_links: data::SOCIAL_LINKS,
    certifications: data::CERTIFICATIONS,
    awards: data::AWARDS,
};

/// Returns the portfolio document
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

impl Portfolio {
    /// First project carrying the given id
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Roles held at a company, newest first (the order they are authored in)
    pub fn experience_at<'a>(
        &'a self,
        company: &'a str,
    ) -> impl Iterator<Item = &'a WorkExperience> + 'a {
        self.work_experience
            .iter()
            .filter(move |w| w.company.eq_ignore_ascii_case(company))
    }
}
