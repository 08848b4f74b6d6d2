use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in against the server and open a session
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Close the current session
    Logout,

    /// Show whether a session is active (lists users when it is)
    Status,

    /// User operations (require an active session)
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
