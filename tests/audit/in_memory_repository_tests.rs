use bucket_warden::audit::{
    domain::model::enums::{audit_action::AuditAction, audit_outcome::AuditOutcome},
    infrastructure::persistence::repositories::{
        audit_record_repository::{AuditRecordCriteria, AuditRecordRepository},
        in_memory::in_memory_audit_record_repository_impl::InMemoryAuditRecordRepositoryImpl,
    },
};
use chrono::{Duration, Utc};

use crate::support::{BUCKET, USER_A_ID, USER_B_ID, stored_record, uuid};

#[tokio::test]
async fn find_returns_newest_first_with_paging() {
    let repository = InMemoryAuditRecordRepositoryImpl::new();
    let now = Utc::now();
    let oldest = stored_record(USER_A_ID, AuditAction::List, BUCKET, AuditOutcome::Success, now - Duration::minutes(5));
    let newest = stored_record(USER_A_ID, AuditAction::Delete, BUCKET, AuditOutcome::Success, now);
    let middle = stored_record(USER_A_ID, AuditAction::Upload, BUCKET, AuditOutcome::Success, now - Duration::minutes(1));
    for record in [&oldest, &newest, &middle] {
        repository.append(record).await.expect("append succeeds");
    }

    let first_page = repository
        .find(&AuditRecordCriteria::default(), 2, 0)
        .await
        .expect("find succeeds");
    let second_page = repository
        .find(&AuditRecordCriteria::default(), 2, 2)
        .await
        .expect("find succeeds");

    assert_eq!(
        first_page.iter().map(|r| r.id()).collect::<Vec<_>>(),
        vec![newest.id(), middle.id()]
    );
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id(), oldest.id());
}

#[tokio::test]
async fn equal_timestamps_list_later_appends_first() {
    let repository = InMemoryAuditRecordRepositoryImpl::new();
    let at = Utc::now();
    let earlier = stored_record(USER_A_ID, AuditAction::List, BUCKET, AuditOutcome::Success, at);
    let later = stored_record(USER_A_ID, AuditAction::List, BUCKET, AuditOutcome::Success, at);
    repository.append(&earlier).await.expect("append succeeds");
    repository.append(&later).await.expect("append succeeds");

    let found = repository
        .find(&AuditRecordCriteria::default(), 10, 0)
        .await
        .expect("find succeeds");

    assert_eq!(found[0].id(), later.id());
}

#[tokio::test]
async fn criteria_are_combined() {
    let repository = InMemoryAuditRecordRepositoryImpl::new();
    let now = Utc::now();
    for record in [
        stored_record(USER_A_ID, AuditAction::Download, BUCKET, AuditOutcome::Success, now),
        stored_record(USER_A_ID, AuditAction::Download, BUCKET, AuditOutcome::Failure, now),
        stored_record(USER_A_ID, AuditAction::DownloadInitiated, BUCKET, AuditOutcome::Success, now - Duration::days(40)),
        stored_record(USER_B_ID, AuditAction::Download, BUCKET, AuditOutcome::Success, now),
    ] {
        repository.append(&record).await.expect("append succeeds");
    }

    let criteria = AuditRecordCriteria {
        actor_user_id: Some(uuid(USER_A_ID)),
        actions: AuditAction::Download.family(),
        outcome: Some(AuditOutcome::Success),
        recorded_since: Some(now - Duration::days(30)),
        ..AuditRecordCriteria::default()
    };

    assert_eq!(repository.count(&criteria).await.expect("count succeeds"), 1);
    assert_eq!(
        repository
            .count(&AuditRecordCriteria::default())
            .await
            .expect("count succeeds"),
        4
    );
}
