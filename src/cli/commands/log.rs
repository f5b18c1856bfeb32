use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, app: &AppContext) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open_ready(&app.database_path())?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}
