//! Shared CLI plumbing

mod logging;

pub use logging::initialize_logging;
