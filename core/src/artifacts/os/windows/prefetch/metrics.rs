use super::layout::Layout;
use crate::utils::nom_helper::{nom_data, nom_u32_at, nom_u64_at};
use common::windows::PrefetchMetric;

/// Walk the file metrics array. Only the filename location, flags and file reference are kept
pub(crate) fn parse_metrics<'a>(
    data: &'a [u8],
    count: u32,
    layout: &Layout,
) -> nom::IResult<&'a [u8], Vec<PrefetchMetric>> {
    let mut input = data;
    let mut metrics: Vec<PrefetchMetric> = Vec::new();

    for _ in 0..count {
        let (remaining, entry) = nom_data(input, layout.metric_size as u64)?;
        let (_, filename_offset) = nom_u32_at(entry, layout.metric.filename_offset)?;
        let (_, filename_chars) = nom_u32_at(entry, layout.metric.filename_chars)?;
        let (_, flags) = nom_u32_at(entry, layout.metric.flags)?;

        let file_reference = match layout.metric.file_reference {
            Some(offset) => Some(nom_u64_at(entry, offset)?.1),
            None => None,
        };

        metrics.push(PrefetchMetric {
            filename_offset,
            filename_chars,
            flags,
            file_reference,
        });
        input = remaining;
    }

    Ok((input, metrics))
}

/// Trace chain entries are not decoded. Only confirm they fit in the record
pub(crate) fn skip_trace_chains<'a>(
    data: &'a [u8],
    count: u32,
    layout: &Layout,
) -> nom::IResult<&'a [u8], ()> {
    let (input, _) = nom_data(data, count as u64 * layout.trace_chain_size as u64)?;
    Ok((input, ()))
}

#[cfg(test)]
mod tests {
    use super::{parse_metrics, skip_trace_chains};
    use crate::artifacts::os::windows::prefetch::layout::{VERSION17, VERSION26, VERSION30};

    #[test]
    fn test_parse_metrics_version17() {
        let mut data = vec![0; 20];
        data[8..12].copy_from_slice(&100u32.to_le_bytes());
        data[12..16].copy_from_slice(&12u32.to_le_bytes());
        data[16..20].copy_from_slice(&2u32.to_le_bytes());

        let (input, result) = parse_metrics(&data, 1, &VERSION17).unwrap();
        assert!(input.is_empty());
        assert_eq!(result[0].filename_offset, 100);
        assert_eq!(result[0].filename_chars, 12);
        assert_eq!(result[0].flags, 2);
        assert_eq!(result[0].file_reference, None);
    }

    #[test]
    fn test_parse_metrics_version26() {
        let mut data = vec![0; 64];
        for (index, entry) in data.chunks_mut(32).enumerate() {
            entry[12..16].copy_from_slice(&(index as u32 * 40).to_le_bytes());
            entry[16..20].copy_from_slice(&19u32.to_le_bytes());
            entry[24..32].copy_from_slice(&0x0001000000001234u64.to_le_bytes());
        }

        let (_, result) = parse_metrics(&data, 2, &VERSION26).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].filename_offset, 40);
        assert_eq!(result[1].filename_chars, 19);
        assert_eq!(result[1].file_reference, Some(0x0001000000001234));
    }

    #[test]
    fn test_parse_metrics_truncated() {
        let data = vec![0; 40];
        assert!(parse_metrics(&data, 2, &VERSION26).is_err());
        let (_, result) = parse_metrics(&data, 0, &VERSION26).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_skip_trace_chains() {
        let data = vec![0; 20];
        let (input, _) = skip_trace_chains(&data, 2, &VERSION30).unwrap();
        assert_eq!(input.len(), 4);
        assert!(skip_trace_chains(&data, 2, &VERSION26).is_err());
    }
}
