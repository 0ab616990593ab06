use std::fmt;

// @module: Caption block parsing and serialization

/// Blank-line delimiter between caption blocks
pub const BLOCK_DELIMITER: &str = "\n\n";

/// Timing-arrow marker that identifies a cue timing line
const TIMING_ARROW: &str = "-->";

// @struct: Single caption block with its document position
#[derive(Debug, Clone)]
pub struct CaptionBlock {
    // @field: 0-based index into the document, assigned at parse time
    pub position: usize,

    // @field: Structured cue or verbatim passthrough content
    pub kind: BlockKind,
}

/// Content of a caption block
#[derive(Debug, Clone)]
pub enum BlockKind {
    /// A structured cue: index line, timing line, one or more text lines.
    /// All lines are kept verbatim so an untranslated render is identical
    /// to the source chunk.
    Cue {
        index_line: String,
        timing_line: String,
        text_lines: Vec<String>,
    },
    /// Anything not matching the cue shape. Emitted unchanged.
    Passthrough { raw: String },
}

impl CaptionBlock {
    /// Classify one raw chunk. A chunk is a cue iff it has at least three
    /// lines and its second line carries the timing arrow; everything else
    /// passes through verbatim, malformed chunks included.
    fn classify(position: usize, chunk: &str) -> Self {
        let lines: Vec<&str> = chunk.split('\n').collect();

        if lines.len() >= 3 && lines[1].contains(TIMING_ARROW) {
            CaptionBlock {
                position,
                kind: BlockKind::Cue {
                    index_line: lines[0].to_string(),
                    timing_line: lines[1].to_string(),
                    text_lines: lines[2..].iter().map(|l| l.to_string()).collect(),
                },
            }
        } else {
            CaptionBlock {
                position,
                kind: BlockKind::Passthrough {
                    raw: chunk.to_string(),
                },
            }
        }
    }

    /// Whether this block is a structured cue
    pub fn is_cue(&self) -> bool {
        matches!(self.kind, BlockKind::Cue { .. })
    }

    /// Display text of a cue (text lines joined with spaces), or `None`
    /// for passthrough blocks
    pub fn display_text(&self) -> Option<String> {
        match &self.kind {
            BlockKind::Cue { text_lines, .. } => Some(text_lines.join(" ")),
            BlockKind::Passthrough { .. } => None,
        }
    }

    /// The cue's index line, used to identify the block in warnings
    pub fn index_line(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Cue { index_line, .. } => Some(index_line),
            BlockKind::Passthrough { .. } => None,
        }
    }
}

impl fmt::Display for CaptionBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            BlockKind::Cue {
                index_line,
                timing_line,
                text_lines,
            } => {
                write!(f, "{}\n{}\n{}", index_line, timing_line, text_lines.join("\n"))
            }
            BlockKind::Passthrough { raw } => write!(f, "{}", raw),
        }
    }
}

/// Split a document into caption blocks on the blank-line delimiter.
/// Never fails; unrecognizable chunks become passthrough blocks.
pub fn parse_blocks(document: &str) -> Vec<CaptionBlock> {
    document
        .split(BLOCK_DELIMITER)
        .enumerate()
        .map(|(position, chunk)| CaptionBlock::classify(position, chunk))
        .collect()
}

/// Rejoin finished block strings into a document. Performs no validation,
/// trusting that the dispatcher filled every slot.
pub fn serialize_blocks(blocks: &[String]) -> String {
    blocks.join(BLOCK_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const WELL_FORMED: &str = "1\n00:00:01,000 --> 00:00:02,000\nHalo dunia\n\n2\n00:00:03,000 --> 00:00:04,000\nSelamat pagi\nKawan";

    #[test]
    fn test_parse_blocks_should_assign_positions_in_document_order() {
        let blocks = parse_blocks(WELL_FORMED);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].position, 0);
        assert_eq!(blocks[1].position, 1);
    }

    #[test]
    fn test_parse_blocks_should_classify_cues() {
        let blocks = parse_blocks(WELL_FORMED);
        assert!(blocks.iter().all(CaptionBlock::is_cue));
        assert_eq!(blocks[0].index_line(), Some("1"));
        assert_eq!(blocks[0].display_text().unwrap(), "Halo dunia");
        // Multi-line cue text joins with a single space
        assert_eq!(blocks[1].display_text().unwrap(), "Selamat pagi Kawan");
    }

    #[test]
    fn test_parse_blocks_should_pass_through_short_chunks() {
        // Two lines only: not a cue even though the arrow is present
        let blocks = parse_blocks("7\n00:00:01,000 --> 00:00:02,000");
        assert!(!blocks[0].is_cue());
        assert_eq!(blocks[0].to_string(), "7\n00:00:01,000 --> 00:00:02,000");
    }

    #[test]
    fn test_parse_blocks_should_pass_through_chunks_without_timing_arrow() {
        let chunk = "1\nnot a timing line\nsome text";
        let blocks = parse_blocks(chunk);
        assert!(!blocks[0].is_cue());
        assert_eq!(blocks[0].to_string(), chunk);
    }

    #[test]
    fn test_round_trip_should_be_identity_for_well_formed_documents() {
        let rendered: Vec<String> = parse_blocks(WELL_FORMED)
            .iter()
            .map(CaptionBlock::to_string)
            .collect();
        assert_eq!(serialize_blocks(&rendered), WELL_FORMED);
    }

    #[test]
    fn test_round_trip_should_be_identity_for_malformed_mixtures() {
        let doc = "1\n00:00:01,000 --> 00:00:02,000\nText\n\ngarbage chunk\n\n\n\n  \n\n3\n00:00:05,000 --> 00:00:06,000\nMore\nlines\nhere";
        let rendered: Vec<String> = parse_blocks(doc).iter().map(CaptionBlock::to_string).collect();
        assert_eq!(serialize_blocks(&rendered), doc);
    }

    #[test]
    fn test_serialize_blocks_should_join_with_blank_line() {
        let blocks = vec!["a".to_string(), "b".to_string()];
        assert_eq!(serialize_blocks(&blocks), "a\n\nb");
    }

    #[test]
    fn test_file_round_trip_should_preserve_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.srt");
        fs::write(&path, WELL_FORMED).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let rendered: Vec<String> = parse_blocks(&content).iter().map(CaptionBlock::to_string).collect();
        assert_eq!(serialize_blocks(&rendered), WELL_FORMED);
    }
}
