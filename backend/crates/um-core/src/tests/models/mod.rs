mod credentials;
mod edit_form;
mod user_patch;
mod user_record;
