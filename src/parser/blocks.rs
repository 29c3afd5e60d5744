use std::sync::LazyLock;

use regex::Regex;

static COURSE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{4}\d{4}").unwrap());

/// Blocks with fewer non-blank lines than this cannot carry a complete
/// section entry and are dropped.
const MIN_BLOCK_LINES: usize = 6;

/// Split the raw export into per-course blocks. A new block starts at
/// every line that leads with a course code (4 uppercase letters + 4
/// digits, no indentation). Blocks too short to describe a section are
/// silently dropped.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.trim().lines() {
        if COURSE_CODE_RE.is_match(line) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
        .into_iter()
        .filter(|lines| {
            lines.iter().filter(|line| !line.trim().is_empty()).count() >= MIN_BLOCK_LINES
        })
        .map(|lines| lines.join("\n"))
        .collect()
}

// ── Tests ──
