use crate::{CoreError, InMemoryUserStore, NewUser, UserStore};

use std::sync::Arc;

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::new(
        name.to_string(),
        email.to_string(),
        format!("hash-of-{name}"),
    )
    .unwrap()
}

#[tokio::test]
async fn test_empty_store_finds_nothing() {
    let store = InMemoryUserStore::new();

    let found = store.find_by_email("ada@x.com").await.unwrap();

    assert!(found.is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids_from_one() {
    let store = InMemoryUserStore::new();

    let ada = store.insert(new_user("Ada", "ada@x.com")).await.unwrap();
    let bob = store.insert(new_user("Bob", "bob@x.com")).await.unwrap();
    let cy = store.insert(new_user("Cy", "cy@x.com")).await.unwrap();

    assert_eq!(ada.id, 1);
    assert_eq!(bob.id, 2);
    assert_eq!(cy.id, 3);
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_find_by_email_returns_inserted_user() {
    let store = InMemoryUserStore::new();
    store.insert(new_user("Ada", "ada@x.com")).await.unwrap();

    let found = store.find_by_email("ada@x.com").await.unwrap().unwrap();

    assert_eq!(found.id, 1);
    assert_eq!(found.name, "Ada");
}

#[tokio::test]
async fn test_find_by_email_is_case_sensitive() {
    let store = InMemoryUserStore::new();
    store.insert(new_user("Ada", "ada@x.com")).await.unwrap();

    let found = store.find_by_email("ADA@x.com").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_insert_duplicate_email_is_rejected_and_store_unchanged() {
    let store = InMemoryUserStore::new();
    store.insert(new_user("Ada", "ada@x.com")).await.unwrap();

    let result = store.insert(new_user("Impostor", "ada@x.com")).await;

    assert!(
        matches!(result, Err(CoreError::EmailTaken { ref email, .. }) if email == "ada@x.com")
    );
    assert_eq!(store.len().await, 1);
    let kept = store.find_by_email("ada@x.com").await.unwrap().unwrap();
    assert_eq!(kept.name, "Ada");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_with_same_email_store_exactly_one() {
    let store = Arc::new(InMemoryUserStore::new());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .insert(new_user(&format!("user-{i}"), "same@x.com"))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(store.len().await, 1);
}
