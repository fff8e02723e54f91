pub mod metrics;
pub mod summary;
pub mod thresholds;
pub mod verdict;
