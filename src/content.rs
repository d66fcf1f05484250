//! Static page copy, card tables and image URLs.

use crate::components::icons::IconKind;

pub const BRAND_NAME: &str = "Aerie Academy";
pub const HEADLINE: &str = "The One-Stop Platform for Architects to Learn, Grow, and Get Hired.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavCourse {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const NAV_COURSES: &[NavCourse] = &[
    NavCourse {
        title: "GATE Architecture & Planning",
        desc: "Live coaching with IIT alumni mentors",
    },
    NavCourse {
        title: "BIM & Revit Essentials",
        desc: "Practical workflows for studios",
    },
    NavCourse {
        title: "Portfolio & Applications",
        desc: "Craft offers that stand out",
    },
    NavCourse {
        title: "Career Studio",
        desc: "Interview prep and job mapping",
    },
];

pub const NAV_LINKS: &[&str] = &["GATE Prep", "Jobs", "Community", "Resources", "About", "Contact"];

/// `"GATE Prep"` -> `"#gateprep"`
pub fn anchor_for(label: &str) -> String {
    let slug: String = label
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect();
    format!("#{slug}")
}

pub const HERO_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1537726235470-8504e3beef77?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1503387762-592deb58ef4e?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1531831108325-7fe9616ed4cc?q=80&w=1600&auto=format&fit=crop",
];

pub const HERO_HIGHLIGHTS: &[&str] = &["Live classes by IITians & GATE toppers", "Structured mock tests"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: u64,
    pub suffix: &'static str,
}

pub const METRICS: &[Metric] = &[
    Metric {
        label: "Practice Questions",
        value: 2000,
        suffix: "+",
    },
    Metric {
        label: "Regular Mock Exams",
        value: 30,
        suffix: "",
    },
    Metric {
        label: "Live + Recorded Sessions",
        value: 120,
        suffix: "",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub outcome: &'static str,
    pub duration: &'static str,
    pub chip: &'static str,
    pub learn: &'static [&'static str],
    pub img: &'static str,
}

pub const COURSES: &[Course] = &[
    Course {
        title: "GATE Architecture & Planning 2025",
        outcome: "Score higher with a structured, mentor-led plan",
        duration: "6 months · Live Cohort",
        chip: "Live",
        learn: &["Syllabus-first roadmap", "Weekly mock tests", "Doubt clearing with IITians"],
        img: "https://images.unsplash.com/photo-1487956382158-bb926046304a?q=80&w=1600&auto=format&fit=crop",
    },
    Course {
        title: "BIM & Revit Essentials",
        outcome: "Studio-ready modeling and documentation workflows",
        duration: "4 weeks · Cohort",
        chip: "Cohort",
        learn: &["Templates & families", "Sheets & schedules", "Coordination basics"],
        img: "https://images.unsplash.com/photo-1516902803597-96408ad2d63c?q=80&w=1600&auto=format&fit=crop",
    },
    Course {
        title: "Portfolio & Applications",
        outcome: "Present projects that win interviews and admits",
        duration: "3 weeks · New",
        chip: "New",
        learn: &["Narrative & layout", "Case-study polish", "ATS-friendly resume"],
        img: "https://images.unsplash.com/photo-1487700160041-babef9c3cb55?q=80&w=1600&auto=format&fit=crop",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Job {
    pub role: &'static str,
    pub firm: &'static str,
    pub location: &'static str,
    pub tags: &'static [&'static str],
}

pub const JOBS: &[Job] = &[
    Job {
        role: "Junior Architect",
        firm: "Studio Axis",
        location: "Bengaluru",
        tags: &["Full-time", "Hybrid"],
    },
    Job {
        role: "Urban Planner Intern",
        firm: "CityLab",
        location: "Mumbai",
        tags: &["Internship", "On-site"],
    },
    Job {
        role: "BIM Modeler",
        firm: "BuildWorks",
        location: "Remote",
        tags: &["Contract", "Remote"],
    },
    Job {
        role: "Landscape Designer",
        firm: "GreenScape",
        location: "Delhi NCR",
        tags: &["Full-time", "Hybrid"],
    },
];

pub const COMMUNITY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1496307042754-b4aa456c4a2d?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1542744094-24638eff58bb?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1553877522-43269d4ea984?q=80&w=1600&auto=format&fit=crop",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benefit {
    pub icon: IconKind,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: IconKind::Users,
        title: "Mentor AMAs",
        desc: "Weekly live Q&As with industry experts and toppers.",
    },
    Benefit {
        icon: IconKind::MessageSquare,
        title: "Peer groups",
        desc: "Focused cohorts to study, review, and ship together.",
    },
    Benefit {
        icon: IconKind::BookOpenCheck,
        title: "Portfolio reviews",
        desc: "Actionable critique to sharpen project narratives.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mentor {
    pub name: &'static str,
    pub role: &'static str,
    pub firm: &'static str,
}

impl Mentor {
    /// First letter of each word of the name: `"Ananya Rao"` -> `"AR"`.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub const MENTORS: &[Mentor] = &[
    Mentor {
        name: "Ananya Rao",
        role: "Senior Architect",
        firm: "Studio Axis",
    },
    Mentor {
        name: "Rahul Singh",
        role: "Urban Planner",
        firm: "CityLab",
    },
    Mentor {
        name: "Meera Iyer",
        role: "BIM Lead",
        firm: "BuildWorks",
    },
    Mentor {
        name: "Kabir Shah",
        role: "Landscape Architect",
        firm: "GreenScape",
    },
    Mentor {
        name: "Neha Gupta",
        role: "Academic Mentor",
        firm: "IIT Grad",
    },
    Mentor {
        name: "Aman Verma",
        role: "Design Manager",
        firm: "MegaBuild",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
    pub img: &'static str,
}

pub const OUTCOMES: &[Outcome] = &[
    Outcome {
        title: "Live classes that fit your schedule",
        bullets: &["Evening/weekend cohorts", "Concept-first teaching", "Recorded access included"],
        img: "https://images.unsplash.com/photo-1523580846011-d3a5bc25702b?q=80&w=1600&auto=format&fit=crop",
    },
    Outcome {
        title: "Mock exams that build confidence",
        bullets: &["Regular timed tests", "Detailed solutions", "Ranked leaderboards"],
        img: "https://images.unsplash.com/photo-1542810634-71277d95dcbb?q=80&w=1600&auto=format&fit=crop",
    },
    Outcome {
        title: "Structured guidance to admissions and jobs",
        bullets: &["Portfolio mapping", "Interview prep", "Referral network"],
        img: "https://images.unsplash.com/photo-1483058712412-4245e9b90334?q=80&w=1600&auto=format&fit=crop",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
    pub img: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ritika, AIR 56",
        quote: "Mentorship and mocks took me from scattered to systematic. Best decision for GATE.",
        img: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=400&auto=format&fit=crop",
    },
    Testimonial {
        name: "Arjun, BIM Modeler",
        quote: "Hands-on Revit training made me job-ready. Got an offer within a month.",
        img: "https://images.unsplash.com/photo-1547425260-76bcadfb4f2c?q=80&w=400&auto=format&fit=crop",
    },
    Testimonial {
        name: "Nisha, M.Arch Admit",
        quote: "Portfolio studio sharpened my narrative. Landed admits and scholarships.",
        img: "https://images.unsplash.com/photo-1544006659-f0b21884ce1d?q=80&w=400&auto=format&fit=crop",
    },
];

pub const PULL_QUOTE: &str = "Aerie is the one-stop platform that bridges GATE prep, community, and real jobs.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resource {
    pub icon: IconKind,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        icon: IconKind::ArrowDown,
        title: "Free Kit",
        desc: "Syllabus planner, formula sheets, and past-year papers.",
    },
    Resource {
        icon: IconKind::MessageSquare,
        title: "FAQs",
        desc: "Clear answers on timelines, fees, and exam strategy.",
    },
    Resource {
        icon: IconKind::ArrowRight,
        title: "Blog/Guides",
        desc: "Mentor-written guides on GATE and careers.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Learn",
        links: &["Courses", "GATE Prep", "Workshops"],
    },
    FooterColumn {
        heading: "Community",
        links: &["Mentors", "Peer Groups", "Events"],
    },
    FooterColumn {
        heading: "Company",
        links: &["About", "Resources", "Contact"],
    },
];
