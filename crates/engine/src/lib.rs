pub mod accumulate;
pub mod classify;
pub mod daily;
pub mod dormancy;
pub mod forecast;

pub use accumulate::accumulate;
pub use classify::classify;
pub use daily::daily_gdd;
pub use dormancy::{dormancy_occurred, is_dormant, mean_high};
pub use forecast::{project, reduce_periods, Projection};
