use chrono::{DateTime, Utc};
use serde::Serialize;

/// A decoded Prefetch file. Built once per input and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefetchRecord {
    /**Layout revision used to decode the record: 17, 23, 26 or 30 */
    pub format_version: u32,
    /**Raw version value from the record header. Differs from `format_version` for Windows 11 (31) */
    pub header_version: u32,
    pub signature: u32,
    /**Size of the (decompressed) record as declared by its header */
    pub size: u32,
    pub executable_name: String,
    pub path_hash: u32,
    pub run_count: u32,
    /**Most recent first. Empty slots are omitted */
    pub last_run_times: Vec<DateTime<Utc>>,
    pub volumes: Vec<PrefetchVolume>,
    pub resources: Vec<String>,
    pub metrics: Vec<PrefetchMetric>,
    pub trace_chain_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefetchVolume {
    /**Length of the device path in UTF-16 characters */
    pub device_path_length: u32,
    pub device_path: String,
    pub creation: DateTime<Utc>,
    /**Lowercase hex without padding */
    pub serial_number: String,
    pub directory_strings: Vec<String>,
}

/// File metrics entry. Values are kept as found in the file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefetchMetric {
    pub filename_offset: u32,
    pub filename_chars: u32,
    pub flags: u32,
    /**Raw NTFS file reference. Not present in version 17 */
    pub file_reference: Option<u64>,
}

/// One CSV row. A record with several run times produces several rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefetchRow {
    pub last_run_time: String,
    pub executable_name: String,
    pub path_hash: String,
    pub run_count: u32,
}

/// Single execution of a program, used to build a timeline across many Prefetch files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefetchExecution {
    pub executed: DateTime<Utc>,
    pub executable_name: String,
    pub path_hash: String,
}
