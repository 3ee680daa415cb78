/*!
 * Common test utilities and sample documents for the capbridge test suite
 */

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

/// Installs a test logger once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Eight well-formed captions, some spanning several lines
pub const SAMPLE_SRT: &str = "1
00:00:09,209 --> 00:00:12,312
( clock ticking )

2
00:00:14,848 --> 00:00:17,000
MAN:
When we think
of \"E equals m c-squared\",

3
00:00:17,000 --> 00:00:18,752
we have this vision of Einstein

4
00:00:18,752 --> 00:00:20,887
as an old, wrinkly man
with white hair.

5
00:00:20,887 --> 00:00:26,760
MAN 2:
E equals m c-squared is
not about an old Einstein.

6
00:00:26,760 --> 00:00:32,200
MAN 2:
It's all about an eternal Einstein.

7
00:00:32,200 --> 00:00:36,200
<LAUGHING & WHOOPS!>

8
00:00:34,400 --> 00:00:38,400
some more text
";

/// Seven captions whose text is partly numeric
pub const SAMPLE_SRT_NUMERIC: &str = "1
00:00:01,000 --> 00:00:02,000
1941

2
00:00:02,500 --> 00:00:03,000
That was the year.

3
00:00:03,500 --> 00:00:04,000
42

4
00:00:04,500 --> 00:00:06,000
Route
66

5
00:00:06,500 --> 00:00:07,000
3, 2, 1...

6
00:00:07,500 --> 00:00:08,000
100%

7
00:00:08,500 --> 00:00:09,000
7
";

/// Nothing but whitespace
pub const SAMPLE_SRT_EMPTY: &str = "\n\n   \n";

/// Loosely formatted: several blank lines between blocks and at the end
pub const SAMPLE_SRT_BLANK_LINES: &str = "1
00:00:01,000 --> 00:00:02,000
First


2
00:00:03,000 --> 00:00:04,000
Second



";
