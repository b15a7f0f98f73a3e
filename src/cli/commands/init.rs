use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::db::log::audit_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::hint;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with --test)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rStudyplan…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let store = SqliteStore::open(&cfg.database)?;

    println!("✅ Database initialized at {}", &cfg.database);

    audit_or_warn(
        &store,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!("🎉 rStudyplan initialization completed!");
    hint("Next: `rstudyplan login <email>`, then `rstudyplan seed` or `rstudyplan add`.");
    Ok(())
}
