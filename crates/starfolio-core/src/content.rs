//! Compiled-in portfolio content: everything the sections render is a
//! literal data table here, not loaded from any runtime source.

/// Page sections, in document order. Each maps to an in-page anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Certifications,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Experience => "#experience",
            Section::Certifications => "#certifications",
            Section::Contact => "#contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Certifications => "Certifications",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub about_heading: &'static str,
    pub about_summary: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Harshabad Singh",
    greeting: "Hello, I'm",
    tagline: "Turning ideas into clean, intuitive, and scalable digital products",
    about_heading: "AI/ML Engineer | Full-Stack Applications",
    about_summary: "I'm an AI/ML enthusiast passionate about building intelligent systems \
that solve real-world problems. I enjoy working with data, designing machine learning \
models, and integrating AI into full-stack applications. My interests include predictive \
analytics, natural language processing, and AI-driven user experiences. I love turning \
data into meaningful insights and practical, scalable solutions, driven by curiosity, \
problem-solving, and a constant desire to explore how AI can enhance everyday experiences.",
};

/// Rotating headline titles for the typewriter effect.
pub const HERO_TITLES: [&str; 4] = [
    "Machine Learning Enthusiast",
    "Software Developer",
    "Problem Solver",
    "Researcher",
];

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "Clean Code",
        description: "Writing maintainable and scalable code",
    },
    Highlight {
        title: "Creative Design",
        description: "Crafting beautiful user interfaces",
    },
    Highlight {
        title: "Fast Performance",
        description: "Optimizing for speed and efficiency",
    },
    Highlight {
        title: "Team Player",
        description: "Collaborating effectively with teams",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, rendered as a bar.
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Programming & Core",
        skills: &[
            Skill { name: "Python", level: 85 },
            Skill { name: "C++", level: 85 },
            Skill { name: "Data Structures & Algorithms", level: 85 },
            Skill { name: "Operating Systems", level: 80 },
            Skill { name: "Computer Networking", level: 78 },
        ],
    },
    SkillCategory {
        title: "AI / ML",
        skills: &[
            Skill { name: "Machine Learning", level: 90 },
            Skill { name: "PyTorch", level: 85 },
            Skill { name: "Transformers", level: 85 },
            Skill { name: "Hugging Face", level: 80 },
            Skill { name: "OCR Pipelines", level: 80 },
        ],
    },
    SkillCategory {
        title: "Backend & Databases",
        skills: &[
            Skill { name: "Flask", level: 80 },
            Skill { name: "Node.js", level: 78 },
            Skill { name: "REST APIs", level: 85 },
            Skill { name: "Authentication", level: 85 },
            Skill { name: "NoSQL Databases", level: 80 },
        ],
    },
    SkillCategory {
        title: "Frontend & Tools",
        skills: &[
            Skill { name: "React.js", level: 80 },
            Skill { name: "HTML & CSS", level: 85 },
            Skill { name: "Tailwind CSS", level: 85 },
            Skill { name: "Git / GitHub", level: 85 },
            Skill { name: "Linux / Unix", level: 80 },
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "NC2X: Concept & Causal-AI",
        description: "Advanced AI system for context-aware scene understanding, bridging \
perception and reasoning using object detection, scene graphs, and causal analysis.",
        technologies: &[
            "Python",
            "PyTorch",
            "YOLOv8",
            "Graph Neural Network",
            "Streamlit",
            "OpenCV",
        ],
        github_url: "https://github.com/Harshabad13/NC2X_WebApp",
        date: "2025",
        category: "AI / Python",
    },
    Project {
        title: "HiredNext: AI-Powered Mock Interview Platform",
        description: "Practice job interviews with AI-generated questions, voice-based \
sessions, and detailed feedback to improve your interview skills and land your dream job.",
        technologies: &[
            "Next.js",
            "Firebase Firestore",
            "Firebase Authentication",
            "Vapi.ai",
            "Google Gemini",
            "Tailwind CSS",
            "TypeScript",
        ],
        github_url: "https://github.com/Harshabad13/HiredNext-Mock-Inter",
        date: "2025",
        category: "Next.js / AI",
    },
    Project {
        title: "WhatsApp Chat Analysis",
        description: "A Python-based analytics tool that parses WhatsApp chat exports to \
extract insights like message statistics, activity trends, most active users, emoji \
usage, and word clouds.",
        technologies: &[
            "Python",
            "Pandas",
            "Matplotlib",
            "Seaborn",
            "Streamlit",
            "Regex",
            "WordCloud",
        ],
        github_url: "https://github.com/Harshabad13/WhatsApp-Chat-Analysis",
        date: "2025",
        category: "Data Analysis / Python",
    },
];

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub verify_url: &'static str,
}

pub const CERTIFICATIONS: [Certification; 6] = [
    Certification {
        title: "Academy Accreditation - Generative AI Fundamentals",
        issuer: "Databricks",
        date: "Aug 2025",
        verify_url: "https://credentials.databricks.com/9b8491fc-a995-48b2-85f1-1a52e245f36f",
    },
    Certification {
        title: "AI Workflow: Data Analysis and Hypothesis Testing",
        issuer: "IBM",
        date: "Sep 2024",
        verify_url: "https://www.coursera.org/account/accomplishments/records/N6QC1UX5DFZ4",
    },
    Certification {
        title: "Machine Learning: Regression",
        issuer: "University of Washington",
        date: "Sep 2024",
        verify_url: "https://www.coursera.org/account/accomplishments/records/X1K8S0QZWTH0",
    },
    Certification {
        title: "Algorithmic Toolbox",
        issuer: "University of California, San Diego",
        date: "Feb 2025",
        verify_url: "https://www.coursera.org/account/accomplishments/records/BYTWYY0HITFE",
    },
    Certification {
        title: "Object-Oriented Data Structures in C++",
        issuer: "University of Illinois Urbana-Champaign",
        date: "Sep 2024",
        verify_url: "https://www.coursera.org/account/accomplishments/records/E5HFWNK8XGVY",
    },
    Certification {
        title: "Data Structures",
        issuer: "University of California, San Diego",
        date: "Sep 2024",
        verify_url: "https://www.coursera.org/account/accomplishments/records/OWHO2GJ4HL3Q",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Work,
    Education,
}

pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        kind: TimelineKind::Work,
        title: "Hackaccino 3.0 - Computer Society of India (CSI)",
        organization: "Bennett University",
        location: "Greater Noida, Uttar Pradesh",
        period: "June 2025",
        highlights: &[],
    },
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "Bachelor of Technology in Computer Science Engineering",
        organization: "Bennett University",
        location: "Greater Noida, Uttar Pradesh",
        period: "Aug 2023 - Aug 2027",
        highlights: &["Current CGPA: 7.31"],
    },
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "Senior Secondary (Class XII)",
        organization: "Sant Gyaneshwar Model School",
        location: "Alipur, Delhi",
        period: "2022 - 2023",
        highlights: &["Scored 75.4%"],
    },
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "Secondary Education (Class X)",
        organization: "Pratap Public School",
        location: "Karnal, Haryana",
        period: "2020 - 2021",
        highlights: &["Scored 86.1%"],
    },
];

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub url: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        value: "harshabadsingh123@gmail.com",
        url: "mailto:harshabadsingh123@gmail.com",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "Harshabad Singh",
        url: "https://www.linkedin.com/in/harshabad-singh/",
    },
    ContactChannel {
        label: "GitHub",
        value: "Harshabad13",
        url: "https://github.com/Harshabad13",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_have_unique_anchors() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }

    #[test]
    fn test_section_index_matches_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in &SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} over 100", skill.name);
            }
        }
    }
}
