use crate::parser::SectionRecord;

/// Credit value stamped on every record; the export's own credit figure
/// is not carried through.
pub const CREDIT_VALUE: &str = "3.00";

/// Render all records for the timetable tool, six lines each, separated
/// by one blank line.
pub fn format_records(records: &[SectionRecord]) -> String {
    records.iter().map(render_record).collect::<Vec<_>>().join("\n\n")
}

/// Six fixed lines: code, (id), meeting time, location, instructor, credits.
pub fn render_record(record: &SectionRecord) -> String {
    format!(
        "{}\n({})\n{}\n{}\n{}\n{}",
        record.code,
        record.section_id,
        record.meeting_time,
        record.location,
        record.instructor,
        CREDIT_VALUE
    )
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str) -> SectionRecord {
        SectionRecord {
            code: code.to_string(),
            section_id: "12345".to_string(),
            meeting_time: "Mo 10:00 - 10:50".to_string(),
            location: "Room 101".to_string(),
            instructor: "Dr. Smith".to_string(),
        }
    }

    #[test]
    fn six_lines_per_record() {
        let out = render_record(&record("ABCD1234-L1"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "ABCD1234-L1",
                "(12345)",
                "Mo 10:00 - 10:50",
                "Room 101",
                "Dr. Smith",
                "3.00"
            ]
        );
    }

    #[test]
    fn blank_line_between_records() {
        let out = format_records(&[record("ABCD1234-L1"), record("ABCD1234-L2")]);
        assert_eq!(out.matches("\n\n").count(), 1);
        assert_eq!(out.lines().filter(|line| !line.is_empty()).count(), 12);
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(format_records(&[]), "");
    }

    #[test]
    fn formatting_is_deterministic() {
        let records = [record("ABCD1234-L1"), record("ABCD1234-L2")];
        assert_eq!(format_records(&records), format_records(&records));
    }
}
