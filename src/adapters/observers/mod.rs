//! Selection observer adapters.

mod tracing_observer;
mod watch_observer;

pub use tracing_observer::TracingObserver;
pub use watch_observer::WatchObserver;
