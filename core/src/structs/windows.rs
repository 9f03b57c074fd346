use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct PrefetchOptions {
    /**Alternative directory to read Prefetch files from. Default is `%SystemDrive%\Windows\Prefetch` */
    pub alt_dir: Option<String>,
}
