//! Kernel module - server infrastructure and dependencies.

pub mod banner_client;
pub mod deps;
pub mod gemini;
pub mod store;
pub mod test_dependencies;
pub mod traits;
pub mod youtube_client;

pub use banner_client::{BannerClient, NoopImageGenerator};
pub use deps::ServerDeps;
pub use gemini::GeminiGenerative;
pub use store::PostgresCourseStore;
pub use traits::*;
pub use youtube_client::{NoopVideoSearch, YoutubeClient, MAX_VIDEO_RESULTS};
