use std::sync::LazyLock;

use regex::Regex;

static BASE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{4}\d{4}").unwrap());
static SECTION_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\((\d+)\)$").unwrap());
static TIME_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+(\d{2}:\d{2})\s*-\s*(\d{2}:\d{2})$").unwrap());

const WEEKDAYS: &[(&str, &str)] = &[
    ("Mon", "Mo"),
    ("Tue", "Tu"),
    ("Wed", "We"),
    ("Thu", "Th"),
    ("Fri", "Fr"),
    ("Sat", "Sa"),
    ("Sun", "Su"),
];

/// Sentinel instructor for sections whose block ends before the
/// instructor line.
pub const INSTRUCTOR_TBA: &str = "TBA";

/// One scheduled meeting of a course, as handed to the timetable tool.
#[derive(Debug, Clone)]
pub struct SectionRecord {
    pub code: String,
    pub section_id: String,
    pub meeting_time: String,
    pub location: String,
    pub instructor: String,
}

/// Noise-line filter applied after each section's schedule lines. KLMS
/// interleaves enrollment counters and a "Pending" waitlist marker with
/// the schedule; other export formats can supply their own rules.
pub struct SkipRules {
    rules: Vec<fn(&str) -> bool>,
}

impl SkipRules {
    pub fn new(rules: Vec<fn(&str) -> bool>) -> Self {
        SkipRules { rules }
    }

    /// Rules for the KLMS export: bare enrollment counts and the
    /// "Pending" waitlist marker.
    pub fn klms() -> Self {
        SkipRules::new(vec![is_enrollment_count, is_pending_marker])
    }

    pub fn matches(&self, line: &str) -> bool {
        self.rules.iter().any(|rule| rule(line))
    }
}

impl Default for SkipRules {
    fn default() -> Self {
        SkipRules::klms()
    }
}

fn is_enrollment_count(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

fn is_pending_marker(line: &str) -> bool {
    line == "Pending"
}

/// Extract every recognizable section from one course block.
///
/// The first line must lead with the base course code, otherwise the
/// block yields nothing. After a section header `<label> (<id>)` the
/// next four lines are read positionally as date range (unused), time
/// range, location, and instructor; a missing instructor line falls
/// back to [`INSTRUCTOR_TBA`]. Candidates whose time range does not
/// normalize are dropped without a record.
pub fn parse_block(block: &str, skip: &SkipRules) -> Vec<SectionRecord> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut records = Vec::new();
    let Some(base_code) = lines.first().and_then(|line| BASE_CODE_RE.find(line)) else {
        return records;
    };
    let base_code = base_code.as_str();

    let mut i = 1;
    while i < lines.len() {
        if is_credit_note(lines[i]) {
            i += 1;
            continue;
        }
        let Some(header) = SECTION_HEADER_RE.captures(lines[i]) else {
            // Tolerant skip: unrecognized lines are not an error.
            i += 1;
            continue;
        };
        if i + 3 >= lines.len() {
            // Header truncated at the end of the block: the positional
            // fields are unavailable, nothing left to emit.
            break;
        }

        let time_line = lines[i + 2]; // lines[i + 1] is the date range, unused
        let location = lines[i + 3];
        let instructor = lines.get(i + 4).copied().unwrap_or(INSTRUCTOR_TBA);

        if let Some(meeting_time) = normalize_meeting_time(time_line) {
            records.push(SectionRecord {
                code: format!("{}-{}", base_code, &header[1]),
                section_id: header[2].to_string(),
                meeting_time,
                location: location.to_string(),
                instructor: instructor.to_string(),
            });
        }

        i += 5;
        while i < lines.len() && skip.matches(lines[i]) {
            i += 1;
        }
    }

    records
}

fn is_credit_note(line: &str) -> bool {
    line.starts_with('[') && line.contains("Credits")
}

/// Normalize "Mon 10:00 - 10:50" into "Mo 10:00 - 10:50". Returns None
/// for unmatched shapes or unmapped weekday abbreviations.
fn normalize_meeting_time(line: &str) -> Option<String> {
    let caps = TIME_RANGE_RE.captures(line)?;
    let day = WEEKDAYS
        .iter()
        .find(|(long, _)| *long == &caps[1])
        .map(|(_, short)| *short)?;
    Some(format!("{} {} - {}", day, &caps[2], &caps[3]))
}

// ── Tests ──
