//! Core motion and page-state logic for the marketing site
//!
//! Nothing in here touches the DOM. Time is passed in explicitly so the same
//! state machines run during server rendering, in the browser and in tests.

#[cfg(feature = "ssr")]
pub mod config;
mod button;
mod contact;
mod content;
mod header;
mod menu;
pub mod mock_data;
mod motion;
mod navigation;
mod reveal;
mod scroll;
mod settings;
mod transition;
#[cfg(test)]
mod tests;

pub use button::*;
pub use contact::*;
pub use content::*;
pub use header::*;
pub use menu::*;
pub use motion::*;
pub use navigation::*;
pub use reveal::*;
pub use scroll::*;
pub use settings::*;
pub use transition::*;
