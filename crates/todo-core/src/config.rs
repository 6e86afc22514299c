//! Store Connection Configuration

/// Default table holding the todos
pub const DEFAULT_TABLE: &str = "todos";

/// Where the tabular store lives and how to authenticate against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl StoreConfig {
    /// Build from optional raw values; `None` if either is missing or blank
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|s| !s.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            table: DEFAULT_TABLE.to_string(),
        })
    }

    /// Read `SUPABASE_URL`, `SUPABASE_ANON_KEY` and optional `SUPABASE_TABLE`
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let url = lookup("SUPABASE_URL");
        let key = lookup("SUPABASE_ANON_KEY");
        let config = Self::from_parts(url.as_deref(), key.as_deref())?;
        match lookup("SUPABASE_TABLE") {
            Some(table) => Some(config.with_table(&table)),
            None => Some(config),
        }
    }

    /// Override the table name (blank keeps the current one)
    pub fn with_table(mut self, table: &str) -> Self {
        let table = table.trim();
        if !table.is_empty() {
            self.table = table.to_string();
        }
        self
    }

    /// Base endpoint of the table
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_yield_none() {
        assert!(StoreConfig::from_parts(None, Some("key")).is_none());
        assert!(StoreConfig::from_parts(Some("https://x.supabase.co"), None).is_none());
        assert!(StoreConfig::from_parts(Some("   "), Some("key")).is_none());
    }

    #[test]
    fn test_table_url() {
        let config = StoreConfig::from_parts(Some("https://x.supabase.co/"), Some(" key ")).unwrap();
        assert_eq!(config.anon_key, "key");
        assert_eq!(config.table_url(), "https://x.supabase.co/rest/v1/todos");

        let config = config.with_table("tasks");
        assert_eq!(config.table_url(), "https://x.supabase.co/rest/v1/tasks");
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_lookup_table_override() {
        let vars = [
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "key"),
            ("SUPABASE_TABLE", "tasks"),
        ];
        let config = StoreConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.table, "tasks");
    }

    #[test]
    fn test_lookup_blank_table_falls_back() {
        let vars = [
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "key"),
            ("SUPABASE_TABLE", "   "),
        ];
        let config = StoreConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.table, DEFAULT_TABLE);

        let missing_key = [("SUPABASE_URL", "https://x.supabase.co")];
        assert!(StoreConfig::from_lookup(lookup_from(&missing_key)).is_none());
    }

    // the only test touching the process environment
    #[test]
    fn test_from_env() {
        std::env::set_var("SUPABASE_URL", "http://localhost:54321/");
        std::env::set_var("SUPABASE_ANON_KEY", "local-anon-key");
        std::env::set_var("SUPABASE_TABLE", "todos_dev");

        let config = StoreConfig::from_env();

        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_ANON_KEY");
        std::env::remove_var("SUPABASE_TABLE");

        let config = config.unwrap();
        assert_eq!(config.url, "http://localhost:54321");
        assert_eq!(config.anon_key, "local-anon-key");
        assert_eq!(config.table_url(), "http://localhost:54321/rest/v1/todos_dev");
        assert!(StoreConfig::from_env().is_none());
    }

    #[test]
    fn test_blank_table_keeps_default() {
        let config = StoreConfig::from_parts(Some("http://localhost:54321"), Some("k"))
            .unwrap()
            .with_table("  ");
        assert_eq!(config.table, DEFAULT_TABLE);
    }
}
