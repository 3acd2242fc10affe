use crate::session_commands::SessionCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account
    Register {
        username: String,
        password: String,
    },

    /// Sign in and remember the user locally
    Login {
        username: String,
        password: String,
    },

    /// Forget the signed-in user
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Session list operations
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
}
