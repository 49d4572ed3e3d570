use catalog_admin::cli::{self, CommandLine};
use catalog_admin::db::establish_connection_pool;
use catalog_admin::models::config::AppConfig;
use catalog_admin::repository::DieselRepository;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let commands = CommandLine::parse_args();

    let pool = establish_connection_pool(&config.database_url)?;
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("failed to run migrations: {e}"))?;
    drop(conn);

    let repo = DieselRepository::new(pool);
    let output = cli::execute(commands.command, &repo, &repo)?;
    if !output.is_null() {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}
