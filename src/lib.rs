pub mod config;
pub mod interactive;
pub mod logging;
pub mod output;
pub mod recommend;
pub mod schemas;

#[cfg(test)]
mod output_test;
#[cfg(test)]
mod test_support;

pub use config::{ClientConfig, ResponseOrdering};
pub use interactive::InteractiveSearch;
pub use recommend::{HttpRecommendClient, RecommendBackend, RecommendRequest, TransportError};
pub use schemas::FacultyRecord;
