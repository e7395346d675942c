pub mod human;
pub mod terminal;
pub mod text;
pub mod watch;

pub use human::HumanMode;
pub use text::{EpisodeSummary, TextMode};
pub use watch::WatchMode;
