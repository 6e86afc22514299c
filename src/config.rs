//! Build-time Store Configuration
//!
//! The browser has no process environment, so the connection settings are
//! baked in when the bundle is built.

use todo_core::StoreConfig;

/// `None` when `SUPABASE_URL` or `SUPABASE_ANON_KEY` was not set at build time
pub fn store_config() -> Option<StoreConfig> {
    let config = StoreConfig::from_parts(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))?;
    Some(match option_env!("SUPABASE_TABLE") {
        Some(table) => config.with_table(table),
        None => config,
    })
}
