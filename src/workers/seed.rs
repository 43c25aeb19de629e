use crate::common::init;
use crate::repositories::{messages, users};
use crate::settings::AppSettings;
use chrono::{TimeDelta, Utc};
use tracing::info;

const SEED_USERS: [(&str, &str); 3] = [
    ("mohammad", "Mohammad S. Khalaf"),
    ("khader", "Khader A. Murtaja"),
    ("alice", "Alice Johnson"),
];

const SEED_MESSAGES: [(&str, &str, &str, i64); 5] = [
    (
        "khader",
        "mohammad",
        "Hey Mohammad! Just finished the new UI for Cipher",
        0,
    ),
    (
        "mohammad",
        "khader",
        "That's awesome! Can't wait to see it. When can we deploy?",
        2,
    ),
    (
        "khader",
        "mohammad",
        "It's ready to go! Want me to show you a demo first?",
        5,
    ),
    (
        "mohammad",
        "khader",
        "Absolutely! I'm excited to see what you've built",
        7,
    ),
    (
        "alice",
        "mohammad",
        "Hey Mohammad, heard about the new Cipher release. Congrats!",
        60,
    ),
];

/// One-shot component: provisions the schema and replaces all data with a
/// known demo dataset.
pub async fn run(settings: &AppSettings) -> anyhow::Result<()> {
    let ctx = init::initialize_state(settings).await?;

    sqlx::query("DELETE FROM messages").execute(&ctx.db).await?;
    sqlx::query("DELETE FROM users").execute(&ctx.db).await?;

    for (user_id, display_name) in SEED_USERS {
        users::create(&ctx, user_id, display_name).await?;
    }

    let base_time = Utc::now().naive_utc() - TimeDelta::hours(2);
    for (sender_id, receiver_id, content, offset_minutes) in SEED_MESSAGES {
        let timestamp = base_time + TimeDelta::minutes(offset_minutes);
        messages::create(&ctx, sender_id, receiver_id, content, timestamp).await?;
    }

    info!("Seeded the data");
    Ok(())
}
