//! End-to-end CRUD flows against the in-memory adapter.

use super::helpers::{TestService, service};
use rstest::rstest;
use taskboard::task::{
    domain::{Task, TaskDescription, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_retrievable_by_its_identifier(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Water the plants").with_description("balcony only"))
        .await
        .expect("task creation should succeed");

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_replace_delete(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Buy milk"))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::ToDo);

    let updated = service
        .update_task(
            created.id(),
            UpdateTaskRequest::new("Buy milk", TaskStatus::InProgress).with_description("2%"),
        )
        .await
        .expect("update should succeed")
        .expect("task should exist");
    assert_eq!(updated.id(), created.id());
    assert_eq!(
        updated.description().map(TaskDescription::as_str),
        Some("2%")
    );
    assert_eq!(updated.status(), TaskStatus::InProgress);

    let deleted = service
        .delete_task(created.id())
        .await
        .expect("delete should succeed");
    assert!(deleted);

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_without_filter_returns_every_task(service: TestService) {
    for title in ["One", "Two", "Three"] {
        service
            .create_task(CreateTaskRequest::new(title))
            .await
            .expect("task creation should succeed");
    }

    let all = service
        .list_tasks(None)
        .await
        .expect("listing should succeed");
    assert_eq!(all.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_tracks_replacements(service: TestService) {
    let first = service
        .create_task(CreateTaskRequest::new("First").with_status(TaskStatus::InProgress))
        .await
        .expect("task creation should succeed");
    let second = service
        .create_task(CreateTaskRequest::new("Second").with_status(TaskStatus::InProgress))
        .await
        .expect("task creation should succeed");

    service
        .update_task(
            first.id(),
            UpdateTaskRequest::new("First", TaskStatus::Completed),
        )
        .await
        .expect("update should succeed")
        .expect("task should exist");

    let in_progress = service
        .list_tasks(Some(TaskStatus::InProgress))
        .await
        .expect("listing should succeed");
    let completed = service
        .list_tasks(Some(TaskStatus::Completed))
        .await
        .expect("listing should succeed");

    assert_eq!(
        in_progress.iter().map(Task::id).collect::<Vec<_>>(),
        vec![second.id()]
    );
    assert_eq!(
        completed.iter().map(Task::id).collect::<Vec<_>>(),
        vec![first.id()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_unknown_identifier_leaves_the_store_unchanged(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Survivor"))
        .await
        .expect("task creation should succeed");

    let bogus_id = taskboard::task::domain::TaskId::from_i64(created.id().into_inner() + 100);
    let deleted = service
        .delete_task(bogus_id)
        .await
        .expect("delete should succeed");
    assert!(!deleted);

    let all = service
        .list_tasks(None)
        .await
        .expect("listing should succeed");
    assert_eq!(all.len(), 1);
}
