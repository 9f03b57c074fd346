use super::{
    classify::{classify, classify_reader, PrefetchFormat},
    error::PrefetchError,
    fileinfo::FileInfo,
    filenames::get_resources,
    header::{unwrap_container, Header},
    layout::{layout_for, Layout, PREFETCH_SIGNATURE, VERSION30},
    metrics::{parse_metrics, skip_trace_chains},
    volume::parse_volumes,
};
use crate::utils::{
    compression::decompress::{Expander, XpressExpander},
    nom_helper::{nom_data, nom_seek},
};
use common::windows::PrefetchRecord;
use log::error;
use std::io::{Read, Seek};

/// Parse Prefetch bytes using the built in decompression routines
pub fn parse_prefetch(data: &[u8]) -> Result<PrefetchRecord, PrefetchError> {
    parse_prefetch_with(data, &XpressExpander)
}

/// Parse Prefetch bytes. Compressed files are expanded with the provided `Expander`
pub fn parse_prefetch_with(
    data: &[u8],
    expander: &dyn Expander,
) -> Result<PrefetchRecord, PrefetchError> {
    let format = classify(data)?;
    if format != PrefetchFormat::Compressed {
        return get_prefetch_data(data, format);
    }

    let pf_data = unwrap_container(data, expander)?;
    get_prefetch_data(&pf_data, format)
}

/// Parse Prefetch data from a seekable source
pub fn parse_prefetch_reader<R: Read + Seek>(
    reader: &mut R,
) -> Result<PrefetchRecord, PrefetchError> {
    classify_reader(reader)?;

    let mut data = Vec::new();
    if let Err(err) = reader.read_to_end(&mut data) {
        error!("[prefetch] Failed to read prefetch source: {err:?}");
        return Err(PrefetchError::ReadFile);
    }
    parse_prefetch(&data)
}

/// Decode an uncompressed record. Every offset is taken from the start of `data`
fn get_prefetch_data(data: &[u8], format: PrefetchFormat) -> Result<PrefetchRecord, PrefetchError> {
    let (input, header) = match Header::parse_header(data) {
        Ok(result) => result,
        Err(err) => {
            error!("[prefetch] Failed to parse header: {err:?}");
            return Err(PrefetchError::TruncatedRecord);
        }
    };

    if header.signature != PREFETCH_SIGNATURE {
        error!(
            "[prefetch] Bad prefetch signature: {:#x}",
            header.signature
        );
        return Err(PrefetchError::BadSignature);
    }

    let layout = record_layout(format, header.version)?;

    let info = match FileInfo::parse_file_info(input, layout) {
        Ok((_, result)) => result,
        Err(err) => {
            error!("[prefetch] Failed to parse file information: {err:?}");
            return Err(PrefetchError::TruncatedRecord);
        }
    };
    let layout = info.layout;

    let metrics_result = nom_seek(data, info.metrics_offset as u64)
        .and_then(|(input, _)| parse_metrics(input, info.metrics_count, layout));
    let metrics = match metrics_result {
        Ok((_, result)) => result,
        Err(err) => {
            error!(
                "[prefetch] File metrics at {} ({} entries) outside of record: {err:?}",
                info.metrics_offset, info.metrics_count
            );
            return Err(PrefetchError::TruncatedRecord);
        }
    };

    let trace_result = nom_seek(data, info.trace_chains_offset as u64)
        .and_then(|(input, _)| skip_trace_chains(input, info.trace_chains_count, layout));
    if let Err(err) = trace_result {
        error!(
            "[prefetch] Trace chains at {} ({} entries) outside of record: {err:?}",
            info.trace_chains_offset, info.trace_chains_count
        );
        return Err(PrefetchError::TruncatedRecord);
    }

    let volumes_result = nom_seek(data, info.volumes_offset as u64)
        .and_then(|(input, _)| nom_data(input, info.volumes_length as u64))
        .and_then(|(_, section)| parse_volumes(section, info.volumes_count, layout));
    let volumes = match volumes_result {
        Ok((_, result)) => result,
        Err(err) => {
            error!(
                "[prefetch] Volume information at {} ({} bytes) outside of record: {err:?}",
                info.volumes_offset, info.volumes_length
            );
            return Err(PrefetchError::TruncatedRecord);
        }
    };

    let resources = match get_resources(data, info.strings_offset, info.strings_length) {
        Ok((_, result)) => result,
        Err(err) => {
            error!(
                "[prefetch] Filename strings at {} ({} bytes) outside of record: {err:?}",
                info.strings_offset, info.strings_length
            );
            return Err(PrefetchError::TruncatedRecord);
        }
    };

    let record = PrefetchRecord {
        format_version: layout.version,
        header_version: header.version,
        signature: header.signature,
        size: header.size,
        executable_name: header.executable_name,
        path_hash: header.path_hash,
        run_count: info.run_count,
        last_run_times: info.last_run_times,
        volumes,
        resources,
        metrics,
        trace_chain_count: info.trace_chains_count,
    };

    Ok(record)
}

/// Select the layout table. Compressed files hold version 30 records (31 on Windows 11)
fn record_layout(format: PrefetchFormat, version: u32) -> Result<&'static Layout, PrefetchError> {
    if format == PrefetchFormat::Compressed {
        if version == 30 || version == 31 {
            return Ok(&VERSION30);
        }
        error!("[prefetch] Unexpected version {version} inside compressed prefetch");
        return Err(PrefetchError::UnknownFormat);
    }

    match layout_for(format.version()) {
        Some(layout) if layout.version == version => Ok(layout),
        _ => {
            error!(
                "[prefetch] Header version {version} does not match format {:?}",
                format
            );
            Err(PrefetchError::UnknownFormat)
        }
    }
}
