//! Integration tests for the repository layer against a real database:
//! batch send-status updates, the atomic current-version flip, name
//! resolution for assignments, and the append-only send log.

use sqlx::PgPool;

use qadesk_db::models::app_version::CreateAppVersion;
use qadesk_db::models::developer::{CreateDeveloper, UpdateDeveloper};
use qadesk_db::models::item::NewItem;
use qadesk_db::models::send_log::CreateSendLog;
use qadesk_db::models::webhook_config::{CreateWebhookConfig, UpdateWebhookConfig};
use qadesk_db::repositories::{
    DeveloperRepo, ItemRepo, SendLogRepo, VersionRepo, WebhookConfigRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_bug(platform: &str, version: &str, label: &str) -> NewItem {
    NewItem {
        kind: "platform_bug".to_string(),
        platform: platform.to_string(),
        version: version.to_string(),
        label: label.to_string(),
        description: String::new(),
        priority: Some("normal".to_string()),
        is_required: false,
        department: String::new(),
        reported_by: String::new(),
        assignee_ids: Vec::new(),
        dev_status: None,
        fix_status: Some("unfixed".to_string()),
        review_status: Some("pre_review".to_string()),
        planning_link: String::new(),
        note: String::new(),
        created_by: "qa@example.com".to_string(),
    }
}

fn new_version(platform: &str, version: &str) -> CreateAppVersion {
    CreateAppVersion {
        platform: platform.to_string(),
        version: version.to_string(),
    }
}

fn new_developer(name: &str, platform: &str) -> CreateDeveloper {
    CreateDeveloper {
        name: name.to_string(),
        platform: platform.to_string(),
        role: String::new(),
        department: String::new(),
        email: None,
    }
}

fn new_webhook(space: &str, target: &str, url: &str) -> CreateWebhookConfig {
    CreateWebhookConfig {
        space_name: space.to_string(),
        target_platform: target.to_string(),
        webhook_url: url.to_string(),
        is_active: true,
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn mark_sent_advances_the_whole_batch(pool: PgPool) {
    let a = ItemRepo::create(&pool, &new_bug("aos", "1.0.0", "A"))
        .await
        .unwrap();
    let b = ItemRepo::create(&pool, &new_bug("aos", "1.0.0", "B"))
        .await
        .unwrap();
    let untouched = ItemRepo::create(&pool, &new_bug("aos", "1.0.0", "C"))
        .await
        .unwrap();

    let touched = ItemRepo::mark_sent(&pool, &[a.id, b.id]).await.unwrap();
    assert_eq!(touched, 2);

    for id in [a.id, b.id] {
        let item = ItemRepo::find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(item.send_status, "sent");
    }
    let item = ItemRepo::find_by_id(&pool, untouched.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.send_status, "unsent");
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_ids_skips_missing_rows(pool: PgPool) {
    let a = ItemRepo::create(&pool, &new_bug("aos", "1.0.0", "A"))
        .await
        .unwrap();

    let found = ItemRepo::find_by_ids(&pool, &[a.id, 999_999]).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, a.id);
}

// ---------------------------------------------------------------------------
// Version registry
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn set_current_leaves_exactly_one_current_version(pool: PgPool) {
    let v1 = VersionRepo::create(&pool, &new_version("aos", "1.0.0"))
        .await
        .unwrap();
    let v2 = VersionRepo::create(&pool, &new_version("aos", "1.1.0"))
        .await
        .unwrap();

    VersionRepo::set_current(&pool, "aos", v1.id).await.unwrap();
    let flipped = VersionRepo::set_current(&pool, "aos", v2.id)
        .await
        .unwrap()
        .unwrap();
    assert!(flipped.is_current);

    let versions = VersionRepo::list_for_platform(&pool, "aos").await.unwrap();
    let current: Vec<_> = versions.iter().filter(|v| v.is_current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, v2.id);

    let current = VersionRepo::current_for_platform(&pool, "aos")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.id, v2.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn set_current_does_not_cross_platforms(pool: PgPool) {
    let aos = VersionRepo::create(&pool, &new_version("aos", "1.0.0"))
        .await
        .unwrap();
    let ios = VersionRepo::create(&pool, &new_version("ios", "1.0.0"))
        .await
        .unwrap();

    VersionRepo::set_current(&pool, "aos", aos.id).await.unwrap();

    // An id belonging to another platform flips nothing and returns None.
    let result = VersionRepo::set_current(&pool, "aos", ios.id).await.unwrap();
    assert!(result.is_none());

    let ios_row = VersionRepo::find_by_id(&pool, ios.id).await.unwrap().unwrap();
    assert!(!ios_row.is_current);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_platform_version_pair_is_rejected(pool: PgPool) {
    VersionRepo::create(&pool, &new_version("aos", "1.0.0"))
        .await
        .unwrap();
    let err = VersionRepo::create(&pool, &new_version("aos", "1.0.0"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Developers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn names_resolve_for_inactive_but_not_missing_developers(pool: PgPool) {
    let dev = DeveloperRepo::create(&pool, &new_developer("Ana", "aos"))
        .await
        .unwrap();

    DeveloperRepo::update(
        &pool,
        dev.id,
        &UpdateDeveloper {
            name: None,
            platform: None,
            role: None,
            department: None,
            email: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap();

    let names = DeveloperRepo::names_by_ids(&pool, &[dev.id, 999_999])
        .await
        .unwrap();
    assert_eq!(names, vec![(dev.id, "Ana".to_string())]);
}

#[sqlx::test(migrations = "./migrations")]
async fn active_only_listing_excludes_deactivated(pool: PgPool) {
    let keep = DeveloperRepo::create(&pool, &new_developer("Ana", "aos"))
        .await
        .unwrap();
    let gone = DeveloperRepo::create(&pool, &new_developer("Ivo", "aos"))
        .await
        .unwrap();
    DeveloperRepo::update(
        &pool,
        gone.id,
        &UpdateDeveloper {
            name: None,
            platform: None,
            role: None,
            department: None,
            email: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap();

    let active = DeveloperRepo::list(&pool, true, None).await.unwrap();
    let ids: Vec<i64> = active.iter().map(|d| d.id).collect();
    assert!(ids.contains(&keep.id));
    assert!(!ids.contains(&gone.id));
}

// ---------------------------------------------------------------------------
// Webhook configs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn active_lookup_ignores_inactive_and_prefers_lowest_id(pool: PgPool) {
    let first = WebhookConfigRepo::create(&pool, &new_webhook("Space A", "aos", "http://a"))
        .await
        .unwrap();
    WebhookConfigRepo::create(&pool, &new_webhook("Space B", "aos", "http://b"))
        .await
        .unwrap();

    let found = WebhookConfigRepo::find_active_for_target(&pool, "aos")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, first.id);

    WebhookConfigRepo::update(
        &pool,
        first.id,
        &UpdateWebhookConfig {
            space_name: None,
            target_platform: None,
            webhook_url: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap();

    let found = WebhookConfigRepo::find_active_for_target(&pool, "aos")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.space_name, "Space B");
}

// ---------------------------------------------------------------------------
// Send log
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn send_log_lists_newest_first_with_limit(pool: PgPool) {
    for n in 0..3 {
        SendLogRepo::create(
            &pool,
            &CreateSendLog {
                sent_by: "user-1".to_string(),
                sent_by_email: "qa@example.com".to_string(),
                send_type: "platform_bug".to_string(),
                target_classification: "aos".to_string(),
                target_space: "Space".to_string(),
                item_count: n + 1,
                item_summary: format!("batch {n}"),
                success: true,
                error_message: None,
            },
        )
        .await
        .unwrap();
    }

    let logs = SendLogRepo::list_recent(&pool, 2).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].id > logs[1].id);
    assert_eq!(logs[0].item_summary, "batch 2");
}
