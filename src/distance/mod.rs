//! Location-to-location travel distance estimation.
//!
//! Provides the distance oracle the sequencers and the plan formatter share.

mod oracle;

pub use oracle::estimate;
