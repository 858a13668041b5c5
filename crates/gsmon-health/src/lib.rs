//! gsmon-health: endpoint reachability probes and restoration.
//!
//! A probe is a single HTTP GET whose result is classified into a
//! [`ProbeOutcome`]; a failed probe triggers a bounded restoration episode
//! driven by [`restore_access`]. Neither path raises errors to the caller:
//! all failures are values, logged where they occur.

pub mod probe;
pub mod restore;

pub use probe::{ProbeOutcome, probe};
pub use restore::restore_access;
