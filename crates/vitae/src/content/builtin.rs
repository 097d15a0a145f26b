use once_cell::sync::Lazy;

use super::{ContactInfo, Education, Project, ResumeContent, ResumeDownload, SkillGroup};

static BUILTIN: Lazy<ResumeContent> = Lazy::new(build);

impl ResumeContent {
    /// The résumé shipped with the binary.
    pub fn builtin() -> &'static ResumeContent {
        &BUILTIN
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn group(category: &str, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        skills: strings(skills),
    }
}

fn project(name: &str, description: &[&str]) -> Project {
    Project {
        name: name.to_string(),
        description: strings(description),
    }
}

fn build() -> ResumeContent {
    ResumeContent {
        name: "Gagan Veeravelly".to_string(),
        tagline: "AI Engineer | Entrepreneur | Storyteller".to_string(),
        contact_info: ContactInfo {
            location: "📍 Hyderabad, India".to_string(),
            email: "✉️ fabricfiction.co@gmail.com".to_string(),
            linkedin: "https://www.linkedin.com/in/gagan-veeravelly-46a441330/".to_string(),
        },
        career_objective: "Aspiring AI Engineer and Entrepreneur with a passion for building \
            innovative solutions at the intersection of technology, business, and creativity. \
            Experienced in data structures, AI/ML concepts, and full-stack development. Founder \
            of Fabric Fiction, a personalized clothing and lifestyle brand. Skilled at blending \
            technical expertise with entrepreneurial vision to create impactful projects."
            .to_string(),
        education: Education {
            degree: "B.Tech in Artificial Intelligence".to_string(),
            university: "Mahindra University, Hyderabad".to_string(),
            graduation: "Expected Graduation: 2028".to_string(),
        },
        skills: vec![
            group("programming", &["C"]),
            group(
                "coreCS",
                &[
                    "Data Structures & Algorithms",
                    "Discrete Mathematics",
                    "Number Theory",
                    "Cryptography (RSA)",
                    "Graph Theory",
                ],
            ),
            group("webDev", &["Backend APIs", "Shopify"]),
            group(
                "aiMl",
                &[
                    "Data Analytics",
                    "Model Building",
                    "Prompt Engineering",
                    "AI-driven Solutions",
                ],
            ),
            group(
                "entrepreneurship",
                &["Brand Development", "Social Media Marketing", "Customer Research"],
            ),
            group(
                "softSkills",
                &["Communication", "Leadership", "Storytelling", "Creative Direction"],
            ),
        ],
        projects: vec![
            project(
                "Fabric Fiction – Founder (2025 – Present)",
                &[
                    "Founded a personalized clothing and lifestyle brand with focus on merch and wall posters.",
                    "Managed design, production, and sales through Shopify and collaborations with retailers.",
                    "Scaled presence via Instagram marketing (@fabricfiction.co) and influencer partnerships.",
                    "Built interactive shopping experience and professional brand documentation to showcase to MNCs/FAANG recruiters.",
                ],
            ),
            project(
                "Short Film – Director & Writer (2025)",
                &[
                    "Directed and scripted a BTech love story short film inspired by advanced cinematic techniques.",
                    "Handled scriptwriting, character detailing, scene breakdowns, music, and emotional storytelling.",
                    "Explored themes of one-sided love and human connection through innovative visuals.",
                ],
            ),
            project(
                "AI & Data Projects",
                &[
                    "Rate Limiter in C: Implemented a request-limiting system using data structures.",
                    "Music Analytics Website: Designed a platform to analyze Spotify/Apple Music listening patterns by mood/genre.",
                    "Traffic AI Project (Ideation): Proposed AI-based traffic solutions for Hyderabad/Bengaluru using data-driven approaches.",
                    "Stock Price Scraper & Movie Recommendation Engine: Built command-line tools with regex, CSV, and APIs for data extraction and recommendations.",
                ],
            ),
        ],
        achievements: strings(&[
            "Secured ₹5000 seed funding from college entrepreneurship project.",
            "Conducted research & survey project on equality and discrimination.",
            "Completed hands-on coursework in Basic Electrical Engineering, Discrete Structures, and Number Theory.",
            "Built innovative mini-projects (code quality checker, stock scraper, bash utilities).",
        ]),
        interests: strings(&[
            "Creative Writing & Storytelling - Scriptwriting for short films and Instagram videos.",
            "Content Creation - AI themes and Instagram marketing campaigns.",
            "Tech + Business Fusion - Exploring AI, analytics, and entrepreneurship for real-world solutions.",
            "Film & Music Enthusiast - Inspired by cinema (1917, La La Land, Parasite, Her) and artistic storytelling.",
        ]),
        resume: ResumeDownload::default(),
        contact_blurb: super::default_contact_blurb(),
    }
}
