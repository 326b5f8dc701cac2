mod subscriber;
mod tracing_logger;

pub use subscriber::init_tracing;
pub use tracing_logger::TracingLogger;
