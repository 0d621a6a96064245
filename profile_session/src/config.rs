//! Session configuration and startup parameters

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Theme used when no preference is stored
    pub system_prefers_dark: bool,
    /// Address written to the clipboard by share
    pub share_url: String,
    /// Startup query string (`mode=admin&...`)
    pub query: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            system_prefers_dark: false,
            share_url: "http://localhost/".to_string(),
            query: String::new(),
        }
    }
}

/// Parameters parsed from the startup query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupParams {
    params: BTreeMap<String, String>,
}

impl StartupParams {
    /// Parses `a=1&b=2`, with or without a leading `?`
    ///
    /// Keys and values are form-decoded (`%XX` escapes, `+` as space).
    /// Later duplicates lose to the first occurrence.
    pub fn parse(query: &str) -> Self {
        let mut params = BTreeMap::new();
        let query = query.trim().trim_start_matches('?');

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Whether the access gate should open at startup
    pub fn requests_admin(&self) -> bool {
        self.get("mode") == Some("admin")
    }
}
