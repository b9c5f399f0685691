//! Concrete [`ScreenState`](super::traits::ScreenState) implementations.

pub mod dashboard;
pub mod queries;
pub mod review;

pub use dashboard::{DashboardAction, DashboardScreen, ProviderSelector};
pub use queries::{QueriesScreen, QueryAction};
pub use review::{ReviewAction, ReviewScreen};
