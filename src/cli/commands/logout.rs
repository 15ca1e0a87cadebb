use crate::config::Config;
use crate::errors::AppResult;
use crate::store::auth::AuthStore;
use crate::ui::messages;

pub fn handle() -> AppResult<()> {
    AuthStore::new(Config::session_file()).clear()?;
    messages::success("Logged out");
    Ok(())
}
