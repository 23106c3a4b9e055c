use serde::{Deserialize, Serialize};

/// Which backing store the data layer should read from.
///
/// Resolved once at startup and injected into the data layer; the
/// aggregation engine itself never sees collection names, only the
/// snapshots the data layer produces from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Staging,
    #[default]
    Production,
}

impl Environment {
    pub fn collection_name(self, base: &str) -> String {
        match self {
            Environment::Staging => format!("staging_{base}"),
            Environment::Production => base.to_string(),
        }
    }
}
