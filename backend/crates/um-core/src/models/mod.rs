pub mod credentials;
pub mod edit_form;
pub mod new_user;
pub mod notification_kind;
pub mod user_patch;
pub mod user_record;
