pub mod blocks;
pub mod sections;

pub use sections::{SectionRecord, SkipRules};

/// Two-pass pipeline: raw export text → course blocks → section records.
pub fn parse_document(text: &str) -> Vec<SectionRecord> {
    let skip = SkipRules::klms();
    blocks::split_blocks(text)
        .iter()
        .flat_map(|block| sections::parse_block(block, &skip))
        .collect()
}

// ── Tests ──
