use bucket_warden::access_control::domain::{
    model::{
        commands::{
            delete_access_grant_command::DeleteAccessGrantCommand,
            revoke_user_grants_command::RevokeUserGrantsCommand,
            update_access_grant_command::{UpdateAccessGrantCommand, UpdateAccessGrantCommandParts},
        },
        enums::access_control_domain_error::AccessControlDomainError,
    },
    services::access_grant_command_service::AccessGrantCommandService,
};

use crate::support::{
    BUCKET, OTHER_BUCKET, USER_A_ID, USER_B_ID, administrator, create_command, create_harness,
    grant, member, rights,
};

const BACKEND_ID: &str = "0190a6b2-0000-7000-8000-0000000000bb";

fn update_parts(grant_id: String) -> UpdateAccessGrantCommandParts {
    UpdateAccessGrantCommandParts {
        issued_by: administrator(),
        grant_id,
        bucket_name: None,
        prefix: None,
        can_read: None,
        can_write: None,
        can_delete: None,
        can_list: None,
        description: None,
        storage_backend_id: None,
    }
}

#[tokio::test]
async fn handle_create_applies_read_and_list_defaults() {
    let harness = create_harness();

    let created = harness
        .command_service
        .handle_create(create_command(administrator(), USER_A_ID, None))
        .await
        .expect("administrator can create grants");

    let rights = created.rights();
    assert!(rights.can_read);
    assert!(!rights.can_write);
    assert!(!rights.can_delete);
    assert!(rights.can_list);
    assert_eq!(created.prefix().value(), "");
    assert_eq!(created.bucket_name().value(), BUCKET);
    assert!(created.storage_backend_id().is_none());
    assert_eq!(harness.repository.save_calls(), 1);
}

#[tokio::test]
async fn handle_create_rejects_non_administrators() {
    let harness = create_harness();

    let result = harness
        .command_service
        .handle_create(create_command(member(USER_B_ID), USER_A_ID, Some("docs/")))
        .await;

    assert!(matches!(
        result,
        Err(AccessControlDomainError::AdministratorRequired)
    ));
    assert_eq!(harness.repository.save_calls(), 0);
}

#[tokio::test]
async fn handle_update_patches_only_given_fields() {
    let harness = create_harness();
    let existing = grant(USER_A_ID, BUCKET, "docs/", rights(true, false, false, true));
    harness.repository.seed(vec![existing.clone()]);

    let command = UpdateAccessGrantCommand::new(UpdateAccessGrantCommandParts {
        can_write: Some(true),
        storage_backend_id: Some(Some(BACKEND_ID.to_string())),
        ..update_parts(existing.id().to_string())
    })
    .expect("valid update command");

    let updated = harness
        .command_service
        .handle_update(command)
        .await
        .expect("grant exists");

    assert!(updated.rights().can_write);
    assert!(updated.rights().can_read);
    assert_eq!(updated.prefix().value(), "docs/");
    assert_eq!(
        updated.storage_backend_id().map(|id| id.value().to_string()),
        Some(BACKEND_ID.to_string())
    );
    assert!(updated.updated_at().is_some());
}

#[tokio::test]
async fn handle_update_resets_backend_on_explicit_null() {
    let harness = create_harness();
    let existing = grant(USER_A_ID, BUCKET, "docs/", rights(true, false, false, true));
    harness.repository.seed(vec![existing.clone()]);

    let bind = UpdateAccessGrantCommand::new(UpdateAccessGrantCommandParts {
        storage_backend_id: Some(Some(BACKEND_ID.to_string())),
        ..update_parts(existing.id().to_string())
    })
    .expect("valid update command");
    harness
        .command_service
        .handle_update(bind)
        .await
        .expect("bind backend");

    let reset = UpdateAccessGrantCommand::new(UpdateAccessGrantCommandParts {
        storage_backend_id: Some(None),
        ..update_parts(existing.id().to_string())
    })
    .expect("valid update command");
    let updated = harness
        .command_service
        .handle_update(reset)
        .await
        .expect("reset backend");

    assert!(updated.storage_backend_id().is_none());
}

#[tokio::test]
async fn handle_update_clears_description_on_explicit_null() {
    let harness = create_harness();
    let created = harness
        .command_service
        .handle_create(create_command(administrator(), USER_A_ID, Some("docs/")))
        .await
        .expect("administrator can create grants");
    assert_eq!(created.description(), Some("project documents"));

    let untouched = harness
        .command_service
        .handle_update(
            UpdateAccessGrantCommand::new(UpdateAccessGrantCommandParts {
                can_write: Some(true),
                ..update_parts(created.id().to_string())
            })
            .expect("valid update command"),
        )
        .await
        .expect("grant exists");
    assert_eq!(untouched.description(), Some("project documents"));

    let cleared = harness
        .command_service
        .handle_update(
            UpdateAccessGrantCommand::new(UpdateAccessGrantCommandParts {
                description: Some(None),
                ..update_parts(created.id().to_string())
            })
            .expect("valid update command"),
        )
        .await
        .expect("grant exists");
    assert_eq!(cleared.description(), None);
    assert_eq!(harness.repository.stored()[0].description(), None);
}

#[tokio::test]
async fn handle_update_reports_missing_grant() {
    let harness = create_harness();

    let command = UpdateAccessGrantCommand::new(UpdateAccessGrantCommandParts {
        can_delete: Some(true),
        ..update_parts("0190a6b2-0000-7000-8000-0000000000ff".to_string())
    })
    .expect("valid update command");

    let result = harness.command_service.handle_update(command).await;

    assert!(matches!(result, Err(AccessControlDomainError::GrantNotFound)));
    assert_eq!(harness.repository.save_calls(), 0);
}

#[tokio::test]
async fn handle_update_does_not_resurrect_concurrently_deleted_grant() {
    let harness = create_harness();
    let existing = grant(USER_A_ID, BUCKET, "docs/", rights(true, false, false, true));
    harness.repository.seed(vec![existing.clone()]);
    harness.repository.delete_after_next_find();

    let command = UpdateAccessGrantCommand::new(UpdateAccessGrantCommandParts {
        can_write: Some(true),
        ..update_parts(existing.id().to_string())
    })
    .expect("valid update command");

    let result = harness.command_service.handle_update(command).await;

    assert!(matches!(result, Err(AccessControlDomainError::GrantNotFound)));
    assert!(harness.repository.stored().is_empty());
}

#[tokio::test]
async fn handle_delete_removes_existing_grant_and_reports_unknown_ids() {
    let harness = create_harness();
    let existing = grant(USER_A_ID, BUCKET, "docs/", rights(true, false, false, true));
    harness.repository.seed(vec![existing.clone()]);

    let first = DeleteAccessGrantCommand::new(administrator(), existing.id().to_string())
        .expect("valid delete command");
    let second = DeleteAccessGrantCommand::new(administrator(), existing.id().to_string())
        .expect("valid delete command");

    assert!(harness.command_service.handle_delete(first).await.is_ok());
    assert!(matches!(
        harness.command_service.handle_delete(second).await,
        Err(AccessControlDomainError::GrantNotFound)
    ));
    assert!(harness.repository.stored().is_empty());
}

#[tokio::test]
async fn handle_revoke_user_grants_removes_every_grant_of_that_user_only() {
    let harness = create_harness();
    harness.repository.seed(vec![
        grant(USER_A_ID, BUCKET, "docs/", rights(true, false, false, true)),
        grant(USER_A_ID, OTHER_BUCKET, "", rights(true, true, true, true)),
        grant(USER_B_ID, BUCKET, "", rights(true, false, false, true)),
    ]);

    let command = RevokeUserGrantsCommand::new(administrator(), USER_A_ID.to_string())
        .expect("valid revoke command");
    let removed = harness
        .command_service
        .handle_revoke_user_grants(command)
        .await
        .expect("revoke succeeds");

    assert_eq!(removed, 2);
    let remaining = harness.repository.stored();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].owner_user_id().to_string(), USER_B_ID);
}

#[tokio::test]
async fn handle_revoke_user_grants_requires_administrator() {
    let harness = create_harness();

    let command = RevokeUserGrantsCommand::new(member(USER_B_ID), USER_A_ID.to_string())
        .expect("valid revoke command");

    assert!(matches!(
        harness.command_service.handle_revoke_user_grants(command).await,
        Err(AccessControlDomainError::AdministratorRequired)
    ));
}
