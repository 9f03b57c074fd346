/**
 * `Prefetch` data tracks execution of applications on Windows Workstations
 * `Prefetch` is disabled on Windows Servers and may be disabled on systems with SSDs
 *
 * References:
 *  `https://github.com/libyal/libscca/blob/main/documentation/Windows%20Prefetch%20File%20(PF)%20format.asciidoc`
 *
 * Other Parsers:
 *  `https://github.com/Velocidex/velociraptor`
 *  `https://ericzimmerman.github.io/PECmd.zip`
 */
use super::{error::PrefetchError, pf::parse_prefetch};
use crate::{
    filesystem::files::{file_extension, get_file_size, list_files, read_file},
    structs::windows::PrefetchOptions,
    utils::environment::prefetch_directory,
};
use common::windows::PrefetchRecord;
use log::{error, warn};
use rayon::prelude::*;

/// Parse `Prefetch` based on `PrefetchOptions`
pub fn grab_prefetch(options: &PrefetchOptions) -> Result<Vec<PrefetchRecord>, PrefetchError> {
    if let Some(path) = &options.alt_dir {
        return read_directory(path);
    }

    read_directory(&prefetch_directory())
}

/// Read and parse every Prefetch file in a directory. Files that fail to parse are logged and skipped.
/// Results are ordered by file path
pub fn read_directory(path: &str) -> Result<Vec<PrefetchRecord>, PrefetchError> {
    let dir_results = list_files(path);
    let read_dir = match dir_results {
        Ok(result) => result,
        Err(err) => {
            error!("[prefetch] Failed to get prefetch files {path}, error: {err:?}");
            return Err(PrefetchError::ReadDirectory);
        }
    };

    let mut pf_files: Vec<String> = Vec::new();
    for pf_file in read_dir {
        if !file_extension(&pf_file).eq_ignore_ascii_case("pf") {
            warn!("[prefetch] Skipping non-prefetch file {pf_file}");
            continue;
        }
        if get_file_size(&pf_file) == 0 {
            warn!("[prefetch] Skipping empty prefetch file {pf_file}");
            continue;
        }
        pf_files.push(pf_file);
    }
    pf_files.sort();

    let prefetch_data = pf_files
        .par_iter()
        .filter_map(|pf_file| match read_prefetch(pf_file) {
            Ok(result) => Some(result),
            Err(err) => {
                error!("[prefetch] Failed to get prefetch for {pf_file}, error: {err:?}");
                None
            }
        })
        .collect();

    Ok(prefetch_data)
}

/// Read and parse a single Prefetch file
pub fn read_prefetch(path: &str) -> Result<PrefetchRecord, PrefetchError> {
    let buffer_results = read_file(path);
    let buffer = match buffer_results {
        Ok(result) => result,
        Err(err) => {
            error!("[prefetch] Failed to read prefetch file {path}, error: {err:?}");
            return Err(PrefetchError::ReadFile);
        }
    };

    parse_prefetch(&buffer)
}
