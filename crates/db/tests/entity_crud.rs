//! Integration tests for the repository layer against a real database:
//! credential lookup, password update, and the video metadata lifecycle.

use assert_matches::assert_matches;
use chrono::Utc;
use sqlx::SqlitePool;
use vportal_db::models::user::CreateUser;
use vportal_db::models::video::CreateVideo;
use vportal_db::repositories::{UserRepo, VideoRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$fake-hash".to_string(),
        role: "admin".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
    }
}

fn new_video(id: &str, title: &str) -> CreateVideo {
    CreateVideo {
        id: id.to_string(),
        title: title.to_string(),
        path: "storage/videos".to_string(),
        format: "yuv".to_string(),
        frame_rate: 30,
        resolution: "1920x1080".to_string(),
        description: "test clip".to_string(),
        bit_depth: 8,
        created_at: Utc::now(),
        last_updated_by: "alice".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_create_and_lookup(pool: SqlitePool) {
    let created = UserRepo::create(&pool, &new_user("alice"))
        .await
        .expect("create should succeed");
    assert!(created.id > 0);
    assert_eq!(created.username, "alice");
    assert_eq!(created.email, "alice@example.com");

    let by_name = UserRepo::find_by_username(&pool, "alice")
        .await
        .expect("lookup should succeed")
        .expect("user must exist");
    assert_eq!(by_name.id, created.id);

    let by_email = UserRepo::find_by_email(&pool, "alice@example.com")
        .await
        .expect("lookup should succeed")
        .expect("user must exist");
    assert_eq!(by_email.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_lookup_returns_none(pool: SqlitePool) {
    let missing = UserRepo::find_by_username(&pool, "ghost")
        .await
        .expect("lookup should succeed");
    assert!(missing.is_none());

    let missing = UserRepo::find_by_email(&pool, "ghost@example.com")
        .await
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_password_replaces_hash(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("bob")).await.unwrap();

    let updated = UserRepo::update_password(&pool, user.id, "$argon2id$new-hash")
        .await
        .expect("update should succeed");
    assert!(updated);

    let reloaded = UserRepo::find_by_username(&pool, "bob")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.password_hash, "$argon2id$new-hash");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_password_unknown_id_returns_false(pool: SqlitePool) {
    let updated = UserRepo::update_password(&pool, 999_999, "$argon2id$new-hash")
        .await
        .expect("update should succeed");
    assert!(!updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_rejected(pool: SqlitePool) {
    UserRepo::create(&pool, &new_user("carol")).await.unwrap();

    let mut dup = new_user("carol");
    dup.email = "carol-other@example.com".to_string();
    let result = UserRepo::create(&pool, &dup).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)), "unique username constraint must hold");
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_create_and_find_round_trip(pool: SqlitePool) {
    let id = uuid::Uuid::new_v4().to_string();
    let created = VideoRepo::create(&pool, &new_video(&id, "sunrise"))
        .await
        .expect("create should succeed");
    assert_eq!(created.id, id);
    assert_eq!(created.title, "sunrise");
    assert_eq!(created.frame_rate, 30);
    assert_eq!(created.bit_depth, 8);

    let found = VideoRepo::find_by_id(&pool, &id)
        .await
        .expect("lookup should succeed")
        .expect("row must exist");
    assert_eq!(found.resolution, "1920x1080");
    assert_eq!(found.last_updated_by, "alice");
    assert_eq!(found.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_find_unknown_id_returns_none(pool: SqlitePool) {
    let missing = VideoRepo::find_by_id(&pool, "no-such-id")
        .await
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_list_returns_all_rows(pool: SqlitePool) {
    assert!(VideoRepo::list(&pool).await.unwrap().is_empty());

    for title in ["one", "two", "three"] {
        let id = uuid::Uuid::new_v4().to_string();
        VideoRepo::create(&pool, &new_video(&id, title))
            .await
            .unwrap();
    }

    let all = VideoRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_delete_removes_row(pool: SqlitePool) {
    let id = uuid::Uuid::new_v4().to_string();
    VideoRepo::create(&pool, &new_video(&id, "doomed"))
        .await
        .unwrap();

    assert!(VideoRepo::delete(&pool, &id).await.unwrap());
    assert!(VideoRepo::find_by_id(&pool, &id).await.unwrap().is_none());

    // Deleting again reports that nothing was removed.
    assert!(!VideoRepo::delete(&pool, &id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_video_id_rejected(pool: SqlitePool) {
    let id = uuid::Uuid::new_v4().to_string();
    VideoRepo::create(&pool, &new_video(&id, "first")).await.unwrap();

    let result = VideoRepo::create(&pool, &new_video(&id, "second")).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)), "primary key constraint must hold");
}
