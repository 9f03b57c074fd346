/**
 * Fixed offsets and sizes for every Prefetch revision.
 *
 * References:
 *  `https://github.com/libyal/libscca/blob/main/documentation/Windows%20Prefetch%20File%20(PF)%20format.asciidoc`
 *
 * All offsets in the file information block are relative to the start of that block.
 * All offsets stored inside the block are relative to the start of the record
 */

/// Header is 84 bytes for every revision
pub(crate) const EXECUTABLE_NAME_SIZE: usize = 60;
pub(crate) const PREFETCH_SIGNATURE: u32 = 0x41434353; // SCCA

/// Location of each field in the file information block
pub(crate) mod file_info {
    pub(crate) const METRICS_OFFSET: usize = 0;
    pub(crate) const METRICS_COUNT: usize = 4;
    pub(crate) const TRACE_CHAINS_OFFSET: usize = 8;
    pub(crate) const TRACE_CHAINS_COUNT: usize = 12;
    pub(crate) const STRINGS_OFFSET: usize = 16;
    pub(crate) const STRINGS_LENGTH: usize = 20;
    pub(crate) const VOLUMES_OFFSET: usize = 24;
    pub(crate) const VOLUMES_COUNT: usize = 28;
    pub(crate) const VOLUMES_LENGTH: usize = 32;
}

/// Location of each field in a volume entry
pub(crate) mod volume_entry {
    pub(crate) const PATH_OFFSET: usize = 0;
    pub(crate) const PATH_CHARS: usize = 4;
    pub(crate) const CREATION: usize = 8;
    pub(crate) const SERIAL: usize = 16;
    pub(crate) const DIRECTORY_STRINGS_OFFSET: usize = 28;
    pub(crate) const DIRECTORY_STRINGS_COUNT: usize = 32;
}

#[derive(Debug, PartialEq)]
pub(crate) struct MetricLayout {
    pub(crate) filename_offset: usize,
    pub(crate) filename_chars: usize,
    pub(crate) flags: usize,
    pub(crate) file_reference: Option<usize>,
}

#[derive(Debug, PartialEq)]
pub(crate) struct Layout {
    pub(crate) version: u32,
    pub(crate) file_info_size: usize,
    pub(crate) run_count: usize,
    pub(crate) last_run: usize,
    /**Total width of the last run slots. Each slot is 8 bytes */
    pub(crate) last_run_width: usize,
    pub(crate) metric_size: usize,
    pub(crate) metric: MetricLayout,
    pub(crate) trace_chain_size: usize,
    pub(crate) volume_size: usize,
}

/// Windows XP and 2003
pub(crate) const VERSION17: Layout = Layout {
    version: 17,
    file_info_size: 68,
    run_count: 60,
    last_run: 36,
    last_run_width: 8,
    metric_size: 20,
    metric: MetricLayout {
        filename_offset: 8,
        filename_chars: 12,
        flags: 16,
        file_reference: None,
    },
    trace_chain_size: 12,
    volume_size: 40,
};

/// Windows Vista and 7
pub(crate) const VERSION23: Layout = Layout {
    version: 23,
    file_info_size: 156,
    run_count: 68,
    last_run: 44,
    last_run_width: 8,
    metric_size: 32,
    metric: MetricLayout {
        filename_offset: 12,
        filename_chars: 16,
        flags: 20,
        file_reference: Some(24),
    },
    trace_chain_size: 12,
    volume_size: 104,
};

/// Windows 8
pub(crate) const VERSION26: Layout = Layout {
    version: 26,
    file_info_size: 224,
    run_count: 124,
    last_run: 44,
    last_run_width: 64,
    metric_size: 32,
    metric: MetricLayout {
        filename_offset: 12,
        filename_chars: 16,
        flags: 20,
        file_reference: Some(24),
    },
    trace_chain_size: 12,
    volume_size: 104,
};

/// Windows 10 and 11. Always found inside the compressed container
pub(crate) const VERSION30: Layout = Layout {
    version: 30,
    file_info_size: 224,
    run_count: 124,
    last_run: 44,
    last_run_width: 64,
    metric_size: 32,
    metric: MetricLayout {
        filename_offset: 12,
        filename_chars: 16,
        flags: 20,
        file_reference: Some(24),
    },
    trace_chain_size: 8,
    volume_size: 96,
};

/// Version 30 variant with a shorter unknown field before the run count
pub(crate) const VERSION30_COMPACT: Layout = Layout {
    version: 30,
    file_info_size: 216,
    run_count: 116,
    last_run: 44,
    last_run_width: 64,
    metric_size: 32,
    metric: MetricLayout {
        filename_offset: 12,
        filename_chars: 16,
        flags: 20,
        file_reference: Some(24),
    },
    trace_chain_size: 8,
    volume_size: 96,
};

/// Metrics array offset that identifies the compact version 30 variant
pub(crate) const VERSION30_COMPACT_METRICS: u32 = 296;

/// Pick the layout for a revision. The compact version 30 variant is chosen later once the metrics offset is known
pub(crate) fn layout_for(version: u32) -> Option<&'static Layout> {
    match version {
        17 => Some(&VERSION17),
        23 => Some(&VERSION23),
        26 => Some(&VERSION26),
        30 => Some(&VERSION30),
        _ => None,
    }
}
