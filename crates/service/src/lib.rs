pub mod cache;
pub mod coordinator;
pub mod providers;

pub use cache::MemoryCache;
pub use coordinator::GddCoordinator;
pub use providers::{
    ApplicationHistoryProvider, ResultCache, SettingsProvider, WeatherProvider,
};
