use bucket_warden::access_control::{
    domain::model::{
        entities::access_grant::AccessGrantPatch,
        value_objects::{bucket_name::BucketName, user_id::UserId},
    },
    infrastructure::persistence::repositories::{
        access_grant_repository::AccessGrantRepository,
        in_memory::in_memory_access_grant_repository_impl::InMemoryAccessGrantRepositoryImpl,
    },
};
use chrono::Utc;

use crate::support::{BUCKET, OTHER_BUCKET, USER_A_ID, USER_B_ID, grant, rights};

fn user(raw: &str) -> UserId {
    UserId::new(raw.to_string()).expect("valid user id")
}

fn bucket(raw: &str) -> BucketName {
    BucketName::new(raw.to_string()).expect("valid bucket name")
}

#[tokio::test]
async fn save_replaces_grant_with_same_id() {
    let repository = InMemoryAccessGrantRepositoryImpl::new();
    let mut stored = grant(USER_A_ID, BUCKET, "docs/", rights(true, false, false, true));
    repository.save(&stored).await.expect("save succeeds");

    stored.apply_patch(
        AccessGrantPatch {
            can_write: Some(true),
            ..AccessGrantPatch::default()
        },
        Utc::now(),
    );
    repository.save(&stored).await.expect("save succeeds");

    let all = repository.find_all().await.expect("find succeeds");
    assert_eq!(all.len(), 1);
    assert!(all[0].rights().can_write);
}

#[tokio::test]
async fn update_touches_only_existing_grants() {
    let repository = InMemoryAccessGrantRepositoryImpl::new();
    let mut stored = grant(USER_A_ID, BUCKET, "docs/", rights(true, false, false, true));
    repository.save(&stored).await.expect("save succeeds");
    stored.apply_patch(
        AccessGrantPatch {
            can_delete: Some(true),
            ..AccessGrantPatch::default()
        },
        Utc::now(),
    );

    assert!(repository.update(&stored).await.expect("update succeeds"));
    repository.delete(stored.id()).await.expect("delete succeeds");
    assert!(!repository.update(&stored).await.expect("update succeeds"));

    assert!(repository.find_all().await.expect("find succeeds").is_empty());
}

#[tokio::test]
async fn grants_for_user_and_bucket_keep_insertion_order() {
    let repository = InMemoryAccessGrantRepositoryImpl::new();
    let first = grant(USER_A_ID, BUCKET, "b/", rights(true, false, false, true));
    let second = grant(USER_A_ID, BUCKET, "a/", rights(true, false, false, true));
    let elsewhere = grant(USER_A_ID, OTHER_BUCKET, "", rights(true, false, false, true));
    for g in [&first, &second, &elsewhere] {
        repository.save(g).await.expect("save succeeds");
    }

    let found = repository
        .find_by_user_and_bucket(&user(USER_A_ID), &bucket(BUCKET))
        .await
        .expect("find succeeds");

    assert_eq!(
        found.iter().map(|g| *g.id()).collect::<Vec<_>>(),
        vec![*first.id(), *second.id()]
    );
}

#[tokio::test]
async fn delete_by_user_reports_removed_count_and_updates_statistics() {
    let repository = InMemoryAccessGrantRepositoryImpl::new();
    for g in [
        grant(USER_A_ID, BUCKET, "", rights(true, false, false, true)),
        grant(USER_A_ID, OTHER_BUCKET, "", rights(true, false, false, true)),
        grant(USER_B_ID, BUCKET, "", rights(true, false, false, true)),
    ] {
        repository.save(&g).await.expect("save succeeds");
    }

    let removed = repository
        .delete_by_user(&user(USER_A_ID))
        .await
        .expect("delete succeeds");
    let statistics = repository.statistics().await.expect("statistics succeed");

    assert_eq!(removed, 2);
    assert_eq!(statistics.total_grants, 1);
    assert_eq!(statistics.distinct_buckets, 1);
    assert!(
        repository
            .find_by_user(&user(USER_A_ID))
            .await
            .expect("find succeeds")
            .is_empty()
    );
}
