#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Offline incident-report entry: a terminal form that collects a citizen
//! denuncia, validates it, and hands the assembled record to a submission
//! sink.

pub mod capability;
pub mod model;
pub mod tui;
