pub mod collaborators;
pub mod error;
pub mod filter;
pub mod id;
pub mod image;
pub mod models;

#[cfg(test)]
mod tests;

pub use collaborators::{Confirmer, LoginGateway, Notifier, Renderer};
pub use error::{CoreError, Result};
pub use filter::{UserFilter, filter_users};
pub use id::{generate_id, generate_id_with, is_generated_id};
pub use image::{ImageSource, PLACEHOLDER_IMAGE_URI};
pub use models::credentials::{Credentials, LoginResponse};
pub use models::edit_form::EditForm;
pub use models::new_user::NewUser;
pub use models::notification_kind::NotificationKind;
pub use models::user_patch::UserPatch;
pub use models::user_record::UserRecord;
