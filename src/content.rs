use crate::theme::Theme;

const ICON_SERVICE: &str = "https://cdn.simpleicons.org";

pub const OWNER_FIRST_NAME: &str = "Nayan";
pub const OWNER_LAST_NAME: &str = "Das";
pub const ROLE: &str = "Frontend Developer";
pub const CONTACT_EMAIL: &str = "example@example.com";
pub const PROFILE_IMAGE: &str = "/profile.png";

pub const HERO_BIO: &str = "I specialize in Rust, WebAssembly and building user-focused, responsive interfaces. Experienced with data-driven applications and research-based engineering.";

pub const ABOUT: &str = "I'm a passionate Frontend Developer with a strong base in Computer Science and a drive for building user-friendly, clean, and responsive digital products. I'm always exploring modern frameworks and love applying design thinking to frontend engineering.";

pub const CONTACT_BLURB: &str =
    "Feel free to reach out if you'd like to collaborate or have any questions.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: &'static str,
}

impl Skill {
    /// Level as a bar width; authored levels above 100 render full.
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub links: &'static [Link],
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub period: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "JavaScript",
        level: 90,
        icon: "javascript",
    },
    Skill {
        name: "React.js",
        level: 88,
        icon: "react",
    },
    Skill {
        name: "Tailwind CSS",
        level: 85,
        icon: "tailwindcss",
    },
    Skill {
        name: "Python",
        level: 85,
        icon: "python",
    },
    Skill {
        name: "SQL",
        level: 75,
        icon: "mysql",
    },
    Skill {
        name: "HTML5",
        level: 95,
        icon: "html5",
    },
    Skill {
        name: "CSS3",
        level: 90,
        icon: "css3",
    },
    Skill {
        name: "Redux",
        level: 70,
        icon: "redux",
    },
    Skill {
        name: "Bootstrap",
        level: 80,
        icon: "bootstrap",
    },
    Skill {
        name: "REST APIs",
        level: 80,
        icon: "openapiinitiative",
    },
    Skill {
        name: "Git & GitHub",
        level: 85,
        icon: "github",
    },
    Skill {
        name: "Figma",
        level: 70,
        icon: "figma",
    },
    Skill {
        name: "PyTorch",
        level: 65,
        icon: "pytorch",
    },
    Skill {
        name: "Pandas",
        level: 75,
        icon: "pandas",
    },
    Skill {
        name: "TensorFlow",
        level: 65,
        icon: "tensorflow",
    },
];

const IEEE_PAPER: &str = "https://ieeexplore.ieee.org/document/9392739";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "Single-page portfolio with a theme toggle, scroll spy and a puzzle-gated profile picture.",
        links: &[Link {
            label: "View Code",
            url: "https://github.com/onlynayan",
        }],
        tags: &["Rust", "Yew", "WebAssembly"],
    },
    Project {
        title: "IMDB Sentiment Analysis",
        description: "Built with LSTM and Keras for sentiment classification.",
        links: &[Link {
            label: "View Project",
            url: "https://github.com/onlynayan",
        }],
        tags: &["Python", "Keras", "NLP"],
    },
    Project {
        title: "IoT Air Quality Monitoring",
        description: "Built IoT-based system for air quality tracking and analysis.",
        links: &[Link {
            label: "View IEEE Paper",
            url: IEEE_PAPER,
        }],
        tags: &["IoT", "Sensors", "Research"],
    },
    Project {
        title: "Blood Donor Finder",
        description: "Used ML clustering and graph-based techniques for donor search optimization.",
        links: &[
            Link {
                label: "View IEEE Paper",
                url: IEEE_PAPER,
            },
            Link {
                label: "View Journal",
                url: "https://journal.unika.ac.id/index.php/sisforma/article/view/1709",
            },
        ],
        tags: &["Machine Learning", "Graphs", "Research"],
    },
    Project {
        title: "Breast Cancer Classification",
        description: "Built a machine learning model using SVM and KNN to classify breast cancer as malignant or benign based on clinical features.",
        links: &[Link {
            label: "View Project",
            url: "https://github.com/onlynayan/breast-cancer-classification-ml",
        }],
        tags: &["Python", "scikit-learn", "Machine Learning"],
    },
    Project {
        title: "Data Analysis Capstone Project",
        description: "Conducted exploratory data analysis and visualization on a large-scale dataset to uncover business insights and trends.",
        links: &[Link {
            label: "View Project",
            url: "https://github.com/onlynayan/data-analysis-capstone-project",
        }],
        tags: &["Pandas", "Visualization"],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Neural Networks - DeepLearning.AI",
        url: "https://www.coursera.org/account/accomplishments/verify/4039L2NWWVZR",
    },
    Certification {
        title: "Computer Vision - IBM",
        url: "https://www.coursera.org/account/accomplishments/verify/6K4HX2VYG6CF",
    },
    Certification {
        title: "Machine Learning - Stanford",
        url: "https://www.coursera.org/account/accomplishments/verify/L3YE7P0KXYNU",
    },
    Certification {
        title: "Python for Data Science - Dataquest.io",
        url: "https://app.dataquest.io/verify_cert/6E5M49W0XCIP0EPR2MYD/",
    },
];

pub const JOURNEY: &[Experience] = &[Experience {
    period: "2021 - Present",
    title: "Frontend Developer",
    organization: "Freelance",
    description: "Designing and shipping responsive interfaces for research groups and small businesses, from prototype to production.",
}];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/thenayandas/",
        icon: "linkedin",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/onlynayan",
        icon: "github",
    },
    SocialLink {
        label: "ResearchGate",
        url: "https://www.researchgate.net/profile/Nayan-Das-10",
        icon: "researchgate",
    },
    SocialLink {
        label: "LeetCode",
        url: "https://leetcode.com/u/thenayandas/",
        icon: "leetcode",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        label: "Projects",
        target: 15,
    },
    Stat {
        label: "Certifications",
        target: CERTIFICATIONS.len() as u32,
    },
    Stat {
        label: "Publications",
        target: 2,
    },
];

/// Icon service URL for `slug`, tinted for the current theme.
pub fn icon_url(slug: &str, theme: Theme) -> String {
    format!("{ICON_SERVICE}/{slug}/{}", theme.icon_color())
}

pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

pub fn footer_line(year: u32) -> String {
    format!("Built with Rust and Yew. © {year} {OWNER_FIRST_NAME} {OWNER_LAST_NAME}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_follows_theme() {
        assert_eq!(
            icon_url("github", Theme::Dark),
            "https://cdn.simpleicons.org/github/ffffff"
        );
        assert_eq!(
            icon_url("github", Theme::Light),
            "https://cdn.simpleicons.org/github/123524"
        );
    }

    #[test]
    fn skill_levels_render_within_bounds() {
        assert!(SKILLS.iter().all(|skill| skill.percent() <= 100));

        let overfull = Skill {
            name: "x",
            level: 140,
            icon: "x",
        };
        assert_eq!(overfull.percent(), 100);
    }

    #[test]
    fn every_project_has_a_link() {
        assert!(PROJECTS.iter().all(|project| !project.links.is_empty()));
        assert_eq!(PROJECTS[3].links.len(), 2);
    }

    #[test]
    fn certification_stat_tracks_the_list() {
        let stat = STATS
            .iter()
            .find(|stat| stat.label == "Certifications")
            .expect("certification stat");
        assert_eq!(stat.target as usize, CERTIFICATIONS.len());
    }

    #[test]
    fn contact_helpers() {
        assert_eq!(mailto(), "mailto:example@example.com");
        assert_eq!(footer_line(2025), "Built with Rust and Yew. © 2025 Nayan Das");
    }
}
