use super::windows::PrefetchOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CollectionToml {
    pub output: Output,
    pub prefetch: Option<PrefetchOptions>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Output {
    pub name: String,
    pub directory: String,
    /**json, jsonl or csv */
    pub format: String,
    pub logging: Option<String>,
}
