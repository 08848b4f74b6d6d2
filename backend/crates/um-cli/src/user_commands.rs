use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Add a user
    Add {
        #[arg(long)]
        name: String,

        /// Role label, e.g. admin or user
        #[arg(long)]
        role: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        contact: String,

        /// Explicit id (a random 6-digit id is generated otherwise)
        #[arg(long)]
        id: Option<String>,

        /// Image file stored inline as a data URI
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Change fields of an existing user
    Update {
        /// User ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        contact: Option<String>,

        /// Replacement image file
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show one user
    Get {
        /// User ID
        id: String,
    },

    /// List all users
    List,

    /// Filter users by name and role
    Search {
        /// Case-insensitive part of the name
        #[arg(default_value = "")]
        term: String,

        /// Exact role to match
        #[arg(long)]
        role: Option<String>,
    },
}
