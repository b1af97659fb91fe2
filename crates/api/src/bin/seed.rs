//! Development seeder.
//!
//! Inserts a handful of sample participants so a fresh local database has
//! something to show on the dashboard. Idempotent: re-running skips emails
//! that are already registered.

use entryline_core::regcode;
use entryline_db::models::participant::CreateParticipant;
use entryline_db::repositories::ParticipantRepo;

const SAMPLES: [(&str, &str); 3] = [
    ("Aman Kumar", "aman@example.com"),
    ("Chahat Tiwari", "chahat@example.com"),
    ("Pankaj Kumar", "pankaj@example.com"),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = entryline_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    entryline_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    for (name, email) in SAMPLES {
        let input = CreateParticipant {
            name: name.to_string(),
            email: email.to_string(),
        };
        match ParticipantRepo::create(&pool, &input, &regcode::generate()).await {
            Ok(p) => {
                tracing::info!(participant_id = p.id, reg_code = %p.reg_code, name, "Seeded participant");
            }
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
                tracing::info!(email, "Participant already seeded, skipping");
            }
            Err(e) => panic!("Seed failed for {email}: {e}"),
        }
    }

    tracing::info!("Seed complete");
}
