use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::Utc;

/// Append one contact message to the flat-file log, writing the header the
/// first time the file is created. Commas in the message are replaced with
/// semicolons so the line stays a single CSV record.
pub fn append_message(path: &Path, name: &str, email: &str, message: &str) -> anyhow::Result<()> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        bail!("name, email, and message are all required");
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let is_new = !path.exists();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open message log {}", path.display()))?;

    if is_new {
        writeln!(file, "timestamp,name,email,message")?;
    }
    writeln!(
        file,
        "{},{},{},\"{}\"",
        Utc::now().to_rfc3339(),
        name,
        email,
        message.replace(',', ";")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_once_and_appends() {
        let path = std::env::temp_dir().join(format!("habit-survey-messages-{}.csv", std::process::id()));
        let _ = std::fs::remove_file(&path);

        append_message(&path, "Avery", "avery@example.com", "Hello there").unwrap();
        append_message(&path, "Jules", "jules@example.com", "One, two, three").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "timestamp,name,email,message");
        assert!(lines[1].contains("avery@example.com"));
        assert!(lines[2].ends_with("\"One; two; three\""));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn blank_fields_are_rejected() {
        let path = std::env::temp_dir().join("habit-survey-messages-rejected.csv");
        assert!(append_message(&path, "  ", "a@example.com", "hi").is_err());
        assert!(append_message(&path, "Avery", "", "hi").is_err());
        assert!(append_message(&path, "Avery", "a@example.com", "").is_err());
        assert!(!path.exists());
    }
}
