//! Description composition: billing period, summary policy, composer.

pub mod composer;
pub mod period;
pub mod policy;

pub use composer::{compose, GlosaComposer};
pub use period::BillingPeriod;
pub use policy::{summarize, ScopeSummary};
