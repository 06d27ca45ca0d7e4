//! Repository tests against a real SQLite database.
//!
//! These exercise the full storage path: embedded migrations, the write
//! actor's transactional jobs, and the monotonic id guarantee the domain
//! relies on.

use std::sync::Arc;

use garden_core::entries::{EntryRepositoryTrait, NewEntry};
use garden_core::goals::{GoalRepositoryTrait, NewGoal};
use garden_core::Error;
use garden_storage_sqlite::entries::EntryRepository;
use garden_storage_sqlite::goals::GoalRepository;
use garden_storage_sqlite::{create_pool, db, init, run_migrations};
use tempfile::tempdir;

struct TestDb {
    entry_repo: EntryRepository,
    goal_repo: GoalRepository,
    // Held so the database file outlives the repositories.
    _dir: tempfile::TempDir,
}

fn setup() -> TestDb {
    let dir = tempdir().unwrap();
    let db_path = init(dir.path().join("garden.db").to_str().unwrap()).unwrap();
    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = db::spawn_writer((*pool).clone());

    TestDb {
        entry_repo: EntryRepository::new(pool.clone(), writer.clone()),
        goal_repo: GoalRepository::new(pool, writer),
        _dir: dir,
    }
}

fn new_entry(text: &str, category: Option<&str>) -> NewEntry {
    NewEntry {
        text: text.to_string(),
        timestamp: garden_core::utils::time_utils::now_nanos(),
        category: category.map(str::to_string),
    }
}

#[tokio::test]
async fn insert_assigns_monotonic_ids_and_lists_newest_first() {
    let db = setup();

    let first = db
        .entry_repo
        .insert_new_entry(new_entry("Warm coffee", Some("Food")))
        .await
        .unwrap();
    let second = db
        .entry_repo
        .insert_new_entry(new_entry("Sunny walk", None))
        .await
        .unwrap();

    assert!(second.id > first.id);

    let listed = db.entry_repo.load_entries().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert_eq!(listed[1].category.as_deref(), Some("Food"));
    assert_eq!(listed[0].category, None);
}

#[tokio::test]
async fn deleted_entry_ids_are_never_reused() {
    let db = setup();

    let first = db
        .entry_repo
        .insert_new_entry(new_entry("one", None))
        .await
        .unwrap();
    assert_eq!(db.entry_repo.delete_entry(first.id).await.unwrap(), 1);

    let second = db
        .entry_repo
        .insert_new_entry(new_entry("two", None))
        .await
        .unwrap();
    assert!(second.id > first.id);

    // Absent id: zero rows affected, nothing else changes.
    assert_eq!(db.entry_repo.delete_entry(first.id).await.unwrap(), 0);
    assert_eq!(db.entry_repo.load_entries().unwrap().len(), 1);
}

#[tokio::test]
async fn goal_completed_flag_round_trips() {
    let db = setup();

    let goal = db
        .goal_repo
        .insert_new_goal(NewGoal {
            text: "Write 3 things daily".to_string(),
            created_at: garden_core::utils::time_utils::now_nanos(),
            completed: false,
        })
        .await
        .unwrap();
    assert!(!goal.completed);

    let updated = db.goal_repo.update_goal_completed(goal.id, true).await.unwrap();
    assert!(updated.completed);
    assert_eq!(updated.text, goal.text);
    assert_eq!(updated.created_at, goal.created_at);

    let listed = db.goal_repo.load_goals().unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].completed);
}

#[tokio::test]
async fn updating_a_missing_goal_is_not_found() {
    let db = setup();

    let err = db.goal_repo.update_goal_completed(404, true).await.unwrap_err();
    assert!(matches!(err, Error::NotFound("Goal", 404)));
}

#[tokio::test]
async fn concurrent_inserts_get_distinct_ids() {
    let db = Arc::new(setup());

    let mut handles = Vec::new();
    for i in 0..16 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            db.entry_repo
                .insert_new_entry(new_entry(&format!("entry {i}"), None))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}
