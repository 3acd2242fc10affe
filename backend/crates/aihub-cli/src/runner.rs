use crate::{CliError, CliResult, Commands, SessionCommands};

use aihub_auth::{KeyValueStore, SessionClient};

use serde_json::{Value, json};

/// Run one command against the session client and produce its JSON output.
pub async fn execute<S: KeyValueStore>(
    client: &SessionClient<S>,
    command: Commands,
) -> CliResult<Value> {
    match command {
        Commands::Register { username, password } => {
            Ok(client.register(&username, &password).await?)
        }
        Commands::Login { username, password } => Ok(client.login(&username, &password).await?),
        Commands::Logout => {
            client.logout();
            Ok(json!({ "success": true }))
        }
        Commands::Whoami => Ok(match client.current_user() {
            Some(identity) => json!({ "username": identity.username }),
            None => Value::Null,
        }),
        Commands::Session { action } => match action {
            SessionCommands::Add {
                session_id,
                username,
            } => {
                let username = resolve_username(client, username)?;
                client.add_session(&username, &session_id).await;
                Ok(json!({ "username": username, "sessionId": session_id }))
            }
            SessionCommands::List { username } => {
                let username = resolve_username(client, username)?;
                let sessions = client.user_sessions(&username).await;
                Ok(json!(sessions))
            }
            SessionCommands::Remove {
                session_id,
                username,
            } => {
                let username = resolve_username(client, username)?;
                client.remove_session(&username, &session_id).await;
                Ok(json!({ "username": username, "sessionId": session_id }))
            }
        },
    }
}

/// Explicit `--username` wins, else the signed-in user.
fn resolve_username<S: KeyValueStore>(
    client: &SessionClient<S>,
    explicit: Option<String>,
) -> CliResult<String> {
    match explicit {
        Some(username) => Ok(username),
        None => client
            .current_user()
            .map(|identity| identity.username)
            .ok_or_else(CliError::not_signed_in),
    }
}
