//! Payment adapters - implementations of payment-related ports.
//!
//! - `StubRiskManagementFilter` - Development/testing stub with a block list

mod stub_risk_filter;

pub use stub_risk_filter::StubRiskManagementFilter;
