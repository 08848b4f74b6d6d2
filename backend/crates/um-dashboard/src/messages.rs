//! Toast and prompt texts shown to the user.

pub const USER_ADDED: &str = "User added successfully!";
pub const USER_UPDATED: &str = "User updated successfully!";
pub const USER_DELETED: &str = "User deleted successfully!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this user?";

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_REJECTED: &str = "Invalid credentials!";
pub const LOGIN_FAILED: &str = "Login failed!";
pub const LOGGED_OUT: &str = "Logged out successfully!";

pub const IMAGE_FAILED: &str = "Failed to read image!";
pub const SAVE_FAILED: &str = "Failed to save users!";

pub fn duplicate_id(id: &str) -> String {
    format!("User id {id} already exists!")
}
