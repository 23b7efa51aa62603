use crate::featured::{partition_featured, Featured};
use crate::icon::Icon;

/// Number of technology chips shown on a compact project card.
pub const COMPACT_TECH_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// One-line pitch for the home page preview.
    pub tagline: &'static str,
    pub icon: Icon,
    pub gradient: &'static str,
    pub technologies: &'static [&'static str],
    /// Hand-picked subset of `technologies` for the home page preview.
    pub highlights: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub featured: bool,
}

impl Featured for ProjectEntry {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl ProjectEntry {
    /// The first `limit` technologies plus how many were left out.
    pub fn tech_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let techs = self.technologies;
        if techs.len() <= limit {
            (techs, 0)
        } else {
            (&techs[..limit], techs.len() - limit)
        }
    }
}

pub fn featured_projects() -> (Vec<&'static ProjectEntry>, Vec<&'static ProjectEntry>) {
    partition_featured(PROJECTS)
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "E-commerce Platform",
        description: "A full-featured e-commerce platform with payment processing, inventory management, and admin dashboard. Built with modern technologies for scalability and performance.",
        tagline: "A modern e-commerce solution built with Next.js and Stripe",
        icon: Icon::Code,
        gradient: "from-blue-500 to-purple-600",
        technologies: &["Next.js", "TypeScript", "Stripe", "PostgreSQL", "Tailwind CSS"],
        highlights: &["Next.js", "TypeScript"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    ProjectEntry {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, team collaboration features, and mobile responsiveness.",
        tagline: "A React Native app for team collaboration and productivity",
        icon: Icon::Smartphone,
        gradient: "from-green-500 to-blue-600",
        technologies: &["React Native", "Firebase", "Node.js", "Socket.io"],
        highlights: &["React Native", "Firebase"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    ProjectEntry {
        title: "Analytics Dashboard",
        description: "Real-time data visualization dashboard with interactive charts, custom reports, and data export functionality.",
        tagline: "Real-time data visualization with interactive charts",
        icon: Icon::BarChart,
        gradient: "from-purple-500 to-pink-600",
        technologies: &["React", "D3.js", "Node.js", "MongoDB", "Chart.js"],
        highlights: &["D3.js", "Node.js"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    ProjectEntry {
        title: "Portfolio Website",
        description: "A responsive portfolio website showcasing projects and blog posts with modern design and smooth animations.",
        tagline: "A personal site for projects and writing",
        icon: Icon::Globe,
        gradient: "from-indigo-500 to-cyan-600",
        technologies: &["Next.js", "Tailwind CSS", "Framer Motion", "MDX"],
        highlights: &["Next.js", "MDX"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    ProjectEntry {
        title: "Weather App",
        description: "A beautiful weather application with location-based forecasts, interactive maps, and weather alerts.",
        tagline: "Location-based forecasts and weather alerts",
        icon: Icon::Cloud,
        gradient: "from-sky-500 to-blue-600",
        technologies: &["React", "OpenWeather API", "Mapbox", "PWA"],
        highlights: &["React", "Mapbox"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    ProjectEntry {
        title: "Social Media Dashboard",
        description: "A comprehensive social media management tool with scheduling, analytics, and multi-platform support.",
        tagline: "Scheduling and analytics across social platforms",
        icon: Icon::Palette,
        gradient: "from-rose-500 to-orange-600",
        technologies: &["Vue.js", "Express", "Redis", "Social APIs"],
        highlights: &["Vue.js", "Redis"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_split() {
        let (featured, other) = featured_projects();
        assert_eq!(featured.len(), 3);
        assert_eq!(other.len(), 3);
        assert_eq!(featured.len() + other.len(), PROJECTS.len());

        assert!(featured.iter().all(|p| p.featured));
        assert!(other.iter().all(|p| !p.featured));
        for p in PROJECTS {
            let hits = featured
                .iter()
                .chain(other.iter())
                .filter(|q| q.title == p.title)
                .count();
            assert_eq!(hits, 1, "{}", p.title);
        }
    }

    #[test]
    fn test_featured_keeps_order() {
        let (featured, other) = featured_projects();
        let titles = featured.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            ["E-commerce Platform", "Task Management App", "Analytics Dashboard"]
        );
        assert_eq!(other[0].title, "Portfolio Website");
    }

    #[test]
    fn test_highlights_are_listed_technologies() {
        for p in PROJECTS {
            assert!(!p.tagline.is_empty(), "{}", p.title);
            assert!(!p.highlights.is_empty(), "{}", p.title);
            for tech in p.highlights {
                assert!(p.technologies.contains(tech), "{}: {tech}", p.title);
            }
        }
        // not simply the first two entries
        assert_eq!(PROJECTS[2].highlights, ["D3.js", "Node.js"]);
    }

    #[test]
    fn test_tech_preview() {
        let ecommerce = &PROJECTS[0];
        let (shown, hidden) = ecommerce.tech_preview(COMPACT_TECH_LIMIT);
        assert_eq!(shown, ["Next.js", "TypeScript", "Stripe"]);
        assert_eq!(hidden, 2);

        let weather = &PROJECTS[4];
        let (shown, hidden) = weather.tech_preview(10);
        assert_eq!(shown.len(), 4);
        assert_eq!(hidden, 0);
    }
}
