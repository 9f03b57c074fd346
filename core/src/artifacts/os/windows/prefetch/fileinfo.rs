use super::layout::{file_info, Layout, VERSION30_COMPACT, VERSION30_COMPACT_METRICS};
use crate::utils::{
    nom_helper::{nom_data, nom_u32_at, nom_unsigned_eight_bytes},
    time::filetime_to_datetime,
};
use chrono::{DateTime, Utc};

/// Section locations and run statistics. Offsets are relative to the start of the record
#[derive(Debug)]
pub(crate) struct FileInfo {
    pub(crate) layout: &'static Layout,
    pub(crate) metrics_offset: u32,
    pub(crate) metrics_count: u32,
    pub(crate) trace_chains_offset: u32,
    pub(crate) trace_chains_count: u32,
    pub(crate) strings_offset: u32,
    pub(crate) strings_length: u32,
    pub(crate) volumes_offset: u32,
    pub(crate) volumes_count: u32,
    pub(crate) volumes_length: u32,
    pub(crate) run_count: u32,
    pub(crate) last_run_times: Vec<DateTime<Utc>>,
}

impl FileInfo {
    /// Parse the file information block that directly follows the header
    pub(crate) fn parse_file_info<'a>(
        data: &'a [u8],
        layout: &'static Layout,
    ) -> nom::IResult<&'a [u8], FileInfo> {
        let (_, metrics_offset) = nom_u32_at(data, file_info::METRICS_OFFSET)?;

        let layout = if layout.version == 30 && metrics_offset == VERSION30_COMPACT_METRICS {
            &VERSION30_COMPACT
        } else {
            layout
        };
        let (input, block) = nom_data(data, layout.file_info_size as u64)?;

        let (_, metrics_count) = nom_u32_at(block, file_info::METRICS_COUNT)?;
        let (_, trace_chains_offset) = nom_u32_at(block, file_info::TRACE_CHAINS_OFFSET)?;
        let (_, trace_chains_count) = nom_u32_at(block, file_info::TRACE_CHAINS_COUNT)?;
        let (_, strings_offset) = nom_u32_at(block, file_info::STRINGS_OFFSET)?;
        let (_, strings_length) = nom_u32_at(block, file_info::STRINGS_LENGTH)?;
        let (_, volumes_offset) = nom_u32_at(block, file_info::VOLUMES_OFFSET)?;
        let (_, volumes_count) = nom_u32_at(block, file_info::VOLUMES_COUNT)?;
        let (_, volumes_length) = nom_u32_at(block, file_info::VOLUMES_LENGTH)?;
        let (_, run_count) = nom_u32_at(block, layout.run_count)?;

        let (mut run_data, _) = nom_data(block, layout.last_run as u64)?;
        let mut last_run_times = Vec::new();
        for _ in 0..layout.last_run_width / 8 {
            let (remaining, filetime) = nom_unsigned_eight_bytes(run_data)?;
            run_data = remaining;

            // Unused slots are zero
            if filetime == 0 {
                continue;
            }
            last_run_times.push(filetime_to_datetime(filetime));
        }

        let info = FileInfo {
            layout,
            metrics_offset,
            metrics_count,
            trace_chains_offset,
            trace_chains_count,
            strings_offset,
            strings_length,
            volumes_offset,
            volumes_count,
            volumes_length,
            run_count,
            last_run_times,
        };

        Ok((input, info))
    }
}
