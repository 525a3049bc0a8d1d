#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// Decoded grouped-gamesettings snapshot: leading synthetic index, the
/// identity and count columns, one replay column, and a single row.
pub fn grouped_snapshot_json() -> &'static str {
    r##"{
        "schema": [
            {"name": "index", "physical_type": "INT64"},
            {"name": "Winners", "physical_type": "BYTE_ARRAY"},
            {"name": "#Winners", "physical_type": "INT64"},
            {"name": "Players", "physical_type": "BYTE_ARRAY"},
            {"name": "#Players", "physical_type": "INT64"},
            {"name": "Difficulty", "physical_type": "DOUBLE"},
            {"name": "Win Replays"},
            {"name": "Copy Paste", "physical_type": "BYTE_ARRAY"}
        ],
        "rows": [
            ["A,B", 2, "C,D", 2, 0.5, "r1,r2", "!preset coop"],
            ["E", 1, "F,G,H", 3, 0, null, "!preset duel"]
        ]
    }"##
}

/// Decoded ratings snapshot with a zero-valued Win Rate in the first row.
pub fn ratings_snapshot_json() -> &'static str {
    r#"{
        "schema": [
            {"name": "index", "physical_type": "INT64"},
            {"name": "Player", "physical_type": "BYTE_ARRAY"},
            {"name": "PVE Rating", "physical_type": "DOUBLE"},
            {"name": "Combined Rank", "physical_type": "DOUBLE"},
            {"name": "Win Rate", "physical_type": "DOUBLE"},
            {"name": "Weighted Award Rate", "physical_type": "DOUBLE"},
            {"name": "Top-5 Difficulties"}
        ],
        "rows": [
            [1, "tetrisface", 9.8, 3, 0, 3.0, "50,49,47,45,44"],
            [2, "fremy", 7.2, 5, 0.873, 12.26, "44,41,40,38,33"]
        ]
    }"#
}
