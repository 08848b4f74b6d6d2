pub mod dashboard;
pub mod error;
pub mod messages;

#[cfg(test)]
mod tests;

pub use dashboard::{MAX_ID_ATTEMPTS, UserDashboard};
pub use error::{DashboardError, Result};
