// ════════════════════════════════════════════════════════════════
//  Configuration
// ════════════════════════════════════════════════════════════════

pub(crate) const DEFAULT_DATABASE: &str = "clg";

fn default_uri() -> String {
    format!("mongodb://127.0.0.1:27017/{DEFAULT_DATABASE}")
}

fn default_collection() -> String {
    "students".to_string()
}

/// Connection settings for the document store.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MongoStoreConfig {
    /// Connection string. A database named in the path is used when
    /// `database` is not set.
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for MongoStoreConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            database: None,
            collection: default_collection(),
        }
    }
}
