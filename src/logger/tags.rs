/// Log tags, one per module that logs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Api,
    Inspector,
}

impl LogTag {
    /// Key matched against `--debug-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Api => "api".to_string(),
            LogTag::Inspector => "inspector".to_string(),
        }
    }

    /// Uncolored label used in log lines
    pub fn to_plain_string(&self) -> String {
        self.to_debug_key().to_uppercase()
    }

    pub fn all() -> &'static [LogTag] {
        &[LogTag::System, LogTag::Api, LogTag::Inspector]
    }
}
