use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Register a session id for a user
    Add {
        /// Session ID
        session_id: String,

        /// User (defaults to the signed-in user)
        #[arg(long)]
        username: Option<String>,
    },

    /// List session ids allowed for a user
    List {
        /// User (defaults to the signed-in user)
        #[arg(long)]
        username: Option<String>,
    },

    /// Drop a session id for a user
    Remove {
        /// Session ID
        session_id: String,

        /// User (defaults to the signed-in user)
        #[arg(long)]
        username: Option<String>,
    },
}
