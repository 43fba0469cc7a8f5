//! The setup runner: presence-check the connection string, load the two
//! SQL scripts, and emit the status lines.
//!
//! Everything written to `out` is the program's observable artifact and
//! must stay byte-identical across runs with unchanged inputs, so no
//! tracing output is ever routed there.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::SetupError;

pub const CREATE_TABLES_SCRIPT: &str = "scripts/001_create_tables.sql";
pub const SEED_DATA_SCRIPT: &str = "scripts/002_seed_data.sql";

pub const DEMO_EMAIL: &str = "demo@hash402.io";
pub const DEMO_PASSWORD: &str = "demo123";

const URL_PREVIEW_CHARS: usize = 30;
const SQL_PREVIEW_CHARS: usize = 200;

/// Truncated prefix of `text` for display, always followed by the `...`
/// marker. Counts characters rather than bytes so a multi-byte value is
/// never split mid-codepoint.
pub fn preview(text: &str, limit: usize) -> String {
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("...");
    truncated
}

/// Run the full setup sequence, resolving the script paths against
/// `root` and writing every status line to `out`.
///
/// The missing-variable error line is written before returning so the
/// caller only has to map the error to an exit code.
pub fn run<W: Write>(cfg: &Config, root: &Path, out: &mut W) -> Result<(), SetupError> {
    writeln!(out, "[v0] Starting database setup...")?;

    let db_url = match cfg.database_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            writeln!(
                out,
                "[v0] ERROR: NEON_DATABASE_URL not found in environment variables"
            )?;
            return Err(SetupError::MissingDatabaseUrl);
        }
    };

    writeln!(
        out,
        "[v0] Database URL found: {}",
        preview(db_url, URL_PREVIEW_CHARS)
    )?;

    let create_tables_sql = read_script(root, CREATE_TABLES_SCRIPT)?;
    let seed_data_sql = read_script(root, SEED_DATA_SCRIPT)?;

    writeln!(out, "[v0] SQL files loaded successfully")?;
    writeln!(out, "[v0] Creating tables...")?;
    writeln!(out, "{}", preview(&create_tables_sql, SQL_PREVIEW_CHARS))?;
    writeln!(out)?;
    writeln!(out, "[v0] Seeding data...")?;
    writeln!(out, "{}", preview(&seed_data_sql, SQL_PREVIEW_CHARS))?;
    writeln!(out)?;
    writeln!(out, "[v0] Setup complete! You can now run the application.")?;
    writeln!(out, "[v0] Login credentials:")?;
    writeln!(out, "[v0]   Email: {DEMO_EMAIL}")?;
    writeln!(out, "[v0]   Password: {DEMO_PASSWORD}")?;

    Ok(())
}

fn read_script(root: &Path, relative: &str) -> Result<String, SetupError> {
    let path = root.join(relative);
    let contents = fs::read_to_string(&path).map_err(|source| SetupError::ScriptRead {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "loaded SQL script");
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_text() {
        let text = "a".repeat(250);
        let p = preview(&text, 200);
        assert_eq!(p.len(), 203);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn preview_keeps_short_text_whole() {
        assert_eq!(preview("SELECT 1;", 200), "SELECT 1;...");
    }

    #[test]
    fn preview_of_empty_text_is_just_the_marker() {
        assert_eq!(preview("", 30), "...");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        // Four characters, eight bytes in UTF-8.
        let text = "éééé";
        assert_eq!(preview(text, 3), "ééé...");
    }
}
