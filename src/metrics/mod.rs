pub mod episode_metrics;

pub use episode_metrics::EpisodeMetrics;
