use crate::auth::{self, AuthSession};
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    match cmd {
        Commands::Login { email } => {
            let session = auth::login(&store, email)?;
            if let Some(user) = session.user() {
                success(format!("Signed in as {}", user.email));
            }
        }
        Commands::Logout => match auth::logout(&store)? {
            Some(user) => success(format!("Logged out successfully ({})", user.email)),
            None => info("Nobody is signed in."),
        },
        Commands::Whoami => match AuthSession::load(&store)? {
            AuthSession::SignedIn(user) => println!(
                "👤 {} (member since {})",
                user.email,
                user.created_at.format("%Y-%m-%d")
            ),
            AuthSession::SignedOut => info("Not signed in."),
        },
        _ => {}
    }

    Ok(())
}
