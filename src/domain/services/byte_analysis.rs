//! Analysis of raw code-section bytes

/// Summary of an extracted `.text` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteAnalysis {
    pub size: usize,
    pub null_offsets: Vec<usize>,
}

impl ByteAnalysis {
    pub fn null_count(&self) -> usize {
        self.null_offsets.len()
    }

    /// True when no byte is zero.
    pub fn is_null_free(&self) -> bool {
        self.null_offsets.is_empty()
    }
}

pub fn analyze_bytes(bytes: &[u8]) -> ByteAnalysis {
    ByteAnalysis {
        size: bytes.len(),
        null_offsets: bytes
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == 0)
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Render bytes as a `\xNN` escaped string.
pub fn escape_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for b in bytes {
        out.push_str(&format!("\\x{:02x}", b));
    }
    out
}
