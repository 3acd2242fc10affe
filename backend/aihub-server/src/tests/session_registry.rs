use crate::SessionRegistry;

#[tokio::test]
async fn test_unknown_user_has_no_sessions() {
    let registry = SessionRegistry::new();
    assert!(registry.list("nobody").await.is_empty());
}

#[tokio::test]
async fn test_add_keeps_insertion_order_and_dedupes() {
    let registry = SessionRegistry::new();

    registry.add("alice", "s2").await;
    registry.add("alice", "s1").await;
    registry.add("alice", "s2").await;

    assert_eq!(registry.list("alice").await, vec!["s2", "s1"]);
}

#[tokio::test]
async fn test_sessions_are_per_user() {
    let registry = SessionRegistry::new();

    registry.add("alice", "s1").await;
    registry.add("bob", "s2").await;

    assert_eq!(registry.list("alice").await, vec!["s1"]);
    assert_eq!(registry.list("bob").await, vec!["s2"]);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let registry = SessionRegistry::new();
    registry.add("alice", "s1").await;
    registry.add("alice", "s2").await;

    registry.remove("alice", "s1").await;
    registry.remove("alice", "s1").await;
    registry.remove("nobody", "s1").await;

    assert_eq!(registry.list("alice").await, vec!["s2"]);
}
