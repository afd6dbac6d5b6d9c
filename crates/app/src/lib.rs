pub mod command;
pub mod rating;
pub mod seed;
pub mod session;
pub mod settings;
pub mod text;

pub use session::Session;
pub use settings::{Overrides, Settings, SettingsFile};
