mod thresholds;

pub use thresholds::ConsistencyThresholds;
