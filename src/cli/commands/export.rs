use crate::cli::commands::signed_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let (store, user) = signed_in(cfg)?;
        let path = expand_tilde(file);
        ExportLogic::export(&store, &user, *format, &path, *force)?;
    }
    Ok(())
}
