//! The session client against a live server on an ephemeral port

use aihub_auth::{AuthClient, Identity, MemoryStore, SessionClient};
use aihub_server::{AppState, UserStore, build_router};

use tempfile::TempDir;
use tokio::net::TcpListener;

async fn spawn_server(temp: &TempDir) -> String {
    let app = build_router(AppState::new(UserStore::new(
        temp.path().join("users.json"),
    )));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_full_account_and_session_flow() {
    let temp = TempDir::new().unwrap();
    let base_url = spawn_server(&temp).await;
    let client = SessionClient::new(AuthClient::new(&base_url), MemoryStore::new());

    client.register("alice", "pw").await.unwrap();
    let err = client.register("alice", "pw").await.unwrap_err();
    assert_eq!(err.message(), "Username already exists");

    let err = client.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err.message(), "Invalid username or password");
    assert_eq!(client.current_user(), None);

    client.login("alice", "pw").await.unwrap();
    assert_eq!(client.current_user(), Some(Identity::new("alice")));

    client.add_session("alice", "s1").await;
    client.add_session("alice", "s2").await;
    assert_eq!(client.user_sessions("alice").await, vec!["s1", "s2"]);

    client.remove_session("alice", "s1").await;
    assert_eq!(client.user_sessions("alice").await, vec!["s2"]);

    client.logout();
    assert_eq!(client.current_user(), None);
}

#[tokio::test]
async fn test_register_with_empty_password_surfaces_server_message() {
    let temp = TempDir::new().unwrap();
    let base_url = spawn_server(&temp).await;
    let client = SessionClient::new(AuthClient::new(&base_url), MemoryStore::new());

    let err = client.register("bob", "").await.unwrap_err();

    assert_eq!(err.message(), "Username and password are required");
}
