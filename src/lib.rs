pub mod animation;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod experience;
pub mod scroll;
pub mod tagline;
pub mod theme;

pub use config::PageConfig;
pub use content::PortfolioContent;
pub use error::{ContentError, Result};
