pub mod common;
pub mod footer;
pub mod frame_loop;
pub mod header;
pub mod icon;
pub mod meta;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod settings;
pub mod transition;

pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use icon::{Icon, icons};
pub use meta::PageMeta;
pub use reveal::{AnimatedSection, provide_reveal_context};
pub use settings::{SettingsScript, provide_site_settings};
pub use transition::TransitionStage;
