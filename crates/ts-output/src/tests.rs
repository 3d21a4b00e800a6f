//! Integration tests for ts-output.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use ts_core::RoundingRule;
    use ts_network::load_problem_reader;
    use ts_schedule::{Schedule, plan};

    pub const SAMPLE: &str = "\
6 4 5 2 1000
2 0 rue-de-londres 1
0 1 rue-d-amsterdam 1
3 1 rue-d-athenes 1
2 3 rue-de-rome 2
1 2 rue-de-moscou 3
4 rue-de-londres rue-d-amsterdam rue-de-moscou rue-de-rome
3 rue-d-athenes rue-de-moscou rue-de-londres
";

    pub const SAMPLE_SUBMISSION: &str = "\
4
0
1
rue-de-londres 1000
1
2
rue-d-amsterdam 500
rue-d-athenes 500
2
1
rue-de-moscou 1000
3
1
rue-de-rome 1000
";

    pub fn sample_schedule() -> Schedule {
        let problem = load_problem_reader(Cursor::new(SAMPLE)).unwrap();
        plan(&problem, RoundingRule::HalfEven).unwrap()
    }

    /// Two intersections, nothing drives into intersection 0.
    pub fn isolated_schedule() -> Schedule {
        let input = "1 2 2 0 4\n0 1 A 1\n0 1 B 1\n";
        let problem = load_problem_reader(Cursor::new(input)).unwrap();
        plan(&problem, RoundingRule::HalfEven).unwrap()
    }
}

#[cfg(test)]
mod submission_tests {
    use super::helpers::{SAMPLE_SUBMISSION, isolated_schedule, sample_schedule};
    use crate::{ScheduleWriter, SubmissionWriter, render_submission};

    #[test]
    fn sample_matches_expected_text() {
        let mut w = SubmissionWriter::new(Vec::new());
        w.write_schedule(&sample_schedule()).unwrap();
        w.finish().unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(text, SAMPLE_SUBMISSION);
    }

    #[test]
    fn render_agrees_with_writer() {
        assert_eq!(render_submission(&sample_schedule()), SAMPLE_SUBMISSION);
    }

    #[test]
    fn isolated_intersection_not_written() {
        let text = render_submission(&isolated_schedule());
        assert_eq!(text, "1\n1\n2\nA 1\nB 1\n");
    }

    #[test]
    fn finish_is_idempotent() {
        let mut w = SubmissionWriter::new(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn create_writes_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("output.txt");
        let mut w = SubmissionWriter::create(&path).unwrap();
        w.write_schedule(&sample_schedule()).unwrap();
        w.finish().unwrap();
        drop(w);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE_SUBMISSION);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::helpers::{isolated_schedule, sample_schedule};
    use crate::csv::CsvScheduleWriter;
    use crate::writer::ScheduleWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let path = dir.path().join("schedule.csv");
        let mut w = CsvScheduleWriter::new(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["intersection", "street", "duration", "policy"]);
    }

    #[test]
    fn csv_one_row_per_phase() {
        let dir = tmp();
        let path = dir.path().join("schedule.csv");
        let mut w = CsvScheduleWriter::new(&path).unwrap();
        w.write_schedule(&sample_schedule()).unwrap();
        assert_eq!(w.rows_written(), 5);
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "rue-d-amsterdam");
        assert_eq!(&rows[1][2], "500");
        assert_eq!(&rows[1][3], "proportional");
    }

    #[test]
    fn csv_records_fallback_policy() {
        let dir = tmp();
        let path = dir.path().join("schedule.csv");
        let mut w = CsvScheduleWriter::new(&path).unwrap();
        w.write_schedule(&isolated_schedule()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| &r[2] == "1" && &r[3] == "zero_demand"));
    }
}
