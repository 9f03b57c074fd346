use crate::utils::time::datetime_to_iso;
use common::windows::{PrefetchExecution, PrefetchRecord, PrefetchRow};

/// Flatten a record into one row per last run time. A record without run times has no rows
pub fn csv_rows(record: &PrefetchRecord) -> Vec<PrefetchRow> {
    record
        .last_run_times
        .iter()
        .map(|run_time| PrefetchRow {
            last_run_time: datetime_to_iso(run_time),
            executable_name: record.executable_name.clone(),
            path_hash: format!("{:x}", record.path_hash),
            run_count: record.run_count,
        })
        .collect()
}

/// Every execution across many records, most recent first
pub fn execution_timeline(records: &[PrefetchRecord]) -> Vec<PrefetchExecution> {
    let mut executions: Vec<PrefetchExecution> = records
        .iter()
        .flat_map(|record| {
            record
                .last_run_times
                .iter()
                .map(|run_time| PrefetchExecution {
                    executed: *run_time,
                    executable_name: record.executable_name.clone(),
                    path_hash: format!("{:x}", record.path_hash),
                })
        })
        .collect();

    executions.sort_by(|first, second| {
        second
            .executed
            .cmp(&first.executed)
            .then_with(|| first.executable_name.cmp(&second.executable_name))
    });
    executions
}

#[cfg(test)]
mod tests {
    use super::{csv_rows, execution_timeline};
    use crate::output::formats::json::tests::test_record;

    #[test]
    fn test_csv_rows() {
        let record = test_record("7Z.EXE", &[1580003041, 1248562800]);
        let rows = csv_rows(&record);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].last_run_time, "2020-01-26T01:44:01.000Z");
        assert_eq!(rows[1].last_run_time, "2009-07-25T23:00:00.000Z");
        assert_eq!(rows[1].executable_name, "7Z.EXE");
        assert_eq!(rows[1].path_hash, "886612c8");
        assert_eq!(rows[1].run_count, 2);
    }

    #[test]
    fn test_csv_rows_no_run_times() {
        let record = test_record("7Z.EXE", &[]);
        assert!(csv_rows(&record).is_empty());
    }

    #[test]
    fn test_execution_timeline() {
        let records = vec![
            test_record("7Z.EXE", &[1580003041, 1248562800]),
            test_record("CMD.EXE", &[1300000000]),
            test_record("AAA.EXE", &[1580003041]),
        ];
        let timeline = execution_timeline(&records);

        let names: Vec<&str> = timeline
            .iter()
            .map(|entry| entry.executable_name.as_str())
            .collect();
        assert_eq!(names, vec!["7Z.EXE", "AAA.EXE", "CMD.EXE", "7Z.EXE"]);
        assert_eq!(timeline[0].executed.timestamp(), 1580003041);
        assert_eq!(timeline[3].executed.timestamp(), 1248562800);
        assert_eq!(timeline[2].path_hash, "886612c8");
    }
}
