//! Editor snapshot for deterministic comparisons

use crate::EditorMode;
use expr_types::ExprId;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Complete editor state snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditorSnapshot {
    pub mode: EditorMode,
    pub selection: Option<ExprId>,
    /// Insertion cursor in its textual form
    pub cursor: Option<String>,
    pub insertion_text: String,
    /// Linearized program ids
    pub program_ids: Vec<ExprId>,
}

impl EditorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update([self.mode as u8]);

        match &self.selection {
            Some(id) => {
                hasher.update([1u8]);
                hasher.update(id.as_str().as_bytes());
            }
            None => hasher.update([0u8]),
        }
        hasher.update(b"\0");

        if let Some(cursor) = &self.cursor {
            hasher.update(cursor.as_bytes());
        }
        hasher.update(b"\0");

        hasher.update(self.insertion_text.as_bytes());
        hasher.update(b"\0");

        for id in &self.program_ids {
            hasher.update(id.as_str().as_bytes());
            hasher.update(b"\n");
        }

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(selection: &str) -> EditorSnapshot {
        EditorSnapshot {
            mode: EditorMode::Normal,
            selection: Some(ExprId::new(selection)),
            cursor: None,
            insertion_text: String::new(),
            program_ids: vec![ExprId::new("0"), ExprId::new("1")],
        }
    }

    #[test]
    fn test_snapshot_hash_deterministic() {
        let snapshot = snapshot("0");
        assert_eq!(snapshot.hash(), snapshot.hash(), "Hash should be deterministic");
    }

    #[test]
    fn test_snapshot_hash_different_for_different_state() {
        assert_ne!(
            snapshot("0").hash(),
            snapshot("1").hash(),
            "Different states should have different hashes"
        );
    }
}
