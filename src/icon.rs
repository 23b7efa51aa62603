/// Glyphs referenced by the content records. Rendering is left to the icon
/// font loaded by the stylesheet; we only emit the class hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowLeft,
    ArrowRight,
    BarChart,
    BookOpen,
    Calendar,
    Clock,
    Cloud,
    Code,
    Database,
    Download,
    ExternalLink,
    Github,
    Globe,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Palette,
    Share,
    Smartphone,
    Tag,
    X,
    Zap,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::ArrowLeft => "icon-arrow-left",
            Icon::ArrowRight => "icon-arrow-right",
            Icon::BarChart => "icon-bar-chart",
            Icon::BookOpen => "icon-book-open",
            Icon::Calendar => "icon-calendar",
            Icon::Clock => "icon-clock",
            Icon::Cloud => "icon-cloud",
            Icon::Code => "icon-code",
            Icon::Database => "icon-database",
            Icon::Download => "icon-download",
            Icon::ExternalLink => "icon-external-link",
            Icon::Github => "icon-github",
            Icon::Globe => "icon-globe",
            Icon::Linkedin => "icon-linkedin",
            Icon::Mail => "icon-mail",
            Icon::MapPin => "icon-map-pin",
            Icon::Menu => "icon-menu",
            Icon::Palette => "icon-palette",
            Icon::Share => "icon-share",
            Icon::Smartphone => "icon-smartphone",
            Icon::Tag => "icon-tag",
            Icon::X => "icon-x",
            Icon::Zap => "icon-zap",
        }
    }
}
