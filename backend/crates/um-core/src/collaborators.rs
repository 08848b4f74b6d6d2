//! Seams between the dashboard operations and the outside world.
//!
//! The terminal front end and the tests provide the implementations.

use crate::{Credentials, LoginResponse, NotificationKind, Result as CoreErrorResult, UserRecord};

use async_trait::async_trait;

/// Receives a toast after each completed operation or failure.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Blocking yes/no prompt asked before destructive operations.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Displays the current or filtered user list.
pub trait Renderer {
    fn render(&self, users: &[UserRecord]);
}

/// Remote login endpoint.
#[async_trait]
pub trait LoginGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> CoreErrorResult<LoginResponse>;
}
