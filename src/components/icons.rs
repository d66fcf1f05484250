//! Inline stroke icons (24x24 grid, Lucide-style paths).

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    ArrowUpRight,
    ArrowDown,
    ChevronLeft,
    ChevronRight,
    Play,
    Pause,
    Menu,
    Close,
    Search,
    MapPin,
    Briefcase,
    ExternalLink,
    Users,
    BookOpenCheck,
    MessageSquare,
}

impl IconKind {
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            IconKind::ArrowDown => &["M12 5v14m0 0l-6-6m6 6l6-6"],
            IconKind::ChevronLeft => &["m15 18-6-6 6-6"],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
            IconKind::Play => &["M6 3l14 9-14 9z"],
            IconKind::Pause => &["M6 4h4v16H6z", "M14 4h4v16h-4z"],
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Close => &["M18 6 6 18", "M6 6l12 12"],
            IconKind::Search => &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16", "m21 21-4.3-4.3"],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            ],
            IconKind::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            IconKind::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::BookOpenCheck => &[
                "M8 3H2v15h7c1.7 0 3 1.3 3 3V7c0-2.2-1.8-4-4-4Z",
                "m16 12 2 2 4-4",
                "M22 6V3h-6c-2.2 0-4 1.8-4 4v14c0-1.7 1.3-3 3-3h7v-2.3",
            ],
            IconKind::MessageSquare => &[
                "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(18)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={props.class.clone()}
            aria-hidden="true"
        >
            { for props.kind.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
