use crate::icon::Icon;

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct JobEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A "What I Do" card on the home page.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Vue.js"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Express", "Python", "PostgreSQL", "MongoDB"],
    },
    SkillGroup {
        category: "Tools & Others",
        items: &["Git", "Docker", "AWS", "Figma", "Jest"],
    },
];

// Newest first.
pub const EXPERIENCE: &[JobEntry] = &[
    JobEntry {
        title: "Senior Full Stack Developer",
        company: "TechCorp Inc.",
        period: "2022 - Present",
        description: "Leading development of enterprise-level web applications using React, Node.js, and cloud technologies.",
    },
    JobEntry {
        title: "Frontend Developer",
        company: "StartupXYZ",
        period: "2020 - 2022",
        description: "Built responsive web applications and improved user experience across multiple products.",
    },
    JobEntry {
        title: "Junior Developer",
        company: "WebSolutions LLC",
        period: "2019 - 2020",
        description: "Developed and maintained client websites using modern JavaScript frameworks and CMS platforms.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Full Stack Development",
        description: "Building robust web applications with React, Next.js, Node.js, and modern databases",
        icon: Icon::Code,
        accent: "bg-primary",
    },
    Service {
        title: "UI/UX Design",
        description: "Creating intuitive and visually appealing user interfaces with modern design principles",
        icon: Icon::Palette,
        accent: "bg-secondary",
    },
    Service {
        title: "Performance Optimization",
        description: "Optimizing applications for speed, accessibility, and search engine visibility",
        icon: Icon::Zap,
        accent: "bg-purple-500",
    },
];
