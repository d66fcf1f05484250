pub mod community;
pub mod courses;
pub mod crossfade;
pub mod final_cta;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod jobs;
pub mod outcomes;
pub mod proof_strip;
pub mod resources;
pub mod testimonials;

pub use community::{CommunityMentorship, MentorDialog};
pub use courses::Courses;
pub use crossfade::CrossFadeStack;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::{Icon, IconKind};
pub use jobs::JobsHighlight;
pub use outcomes::OutcomeNarrative;
pub use proof_strip::{CountUp, ProofStrip};
pub use resources::ResourceHighlights;
pub use testimonials::Testimonials;
