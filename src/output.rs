// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal (tables), quiet (ids only), and JSON output modes.

use crate::inventory::{Image, ImageListResponse, ImagesPruneResponse, PruneDeletedItem};
use crate::runtime::{RemovalEffect, RuntimeInfo, RuntimeMetadata};
use serde::{Deserialize, Serialize};

/// Output mode for CLI feedback.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-friendly tables and messages
    #[default]
    Normal,
    /// Minimal output for scripts (ids only)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print a suggestion following an error (suppressed in quiet mode).
    pub fn hint(&self, hint: &str) {
        match self.mode {
            OutputMode::Normal => eprintln!("Hint: {hint}"),
            OutputMode::Quiet => {}
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "hint",
                    message: hint,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    pub fn images(&self, response: &ImageListResponse) {
        match self.mode {
            OutputMode::Normal => render_image_table(&response.items)
                .iter()
                .for_each(|line| println!("{line}")),
            OutputMode::Quiet => response.items.iter().for_each(|i| println!("{}", i.id)),
            OutputMode::Json => self.json(response),
        }
    }

    pub fn removed(&self, effects: &[RemovalEffect]) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => render_removal(effects)
                .iter()
                .for_each(|line| println!("{line}")),
            OutputMode::Json => {
                let items: Vec<_> = effects
                    .iter()
                    .cloned()
                    .map(PruneDeletedItem::from)
                    .collect();
                self.json(&items);
            }
        }
    }

    pub fn pruned(&self, response: &ImagesPruneResponse) {
        match self.mode {
            OutputMode::Normal => {
                let effects: Vec<RemovalEffect> = response
                    .images_deleted
                    .iter()
                    .map(|item| RemovalEffect {
                        deleted: non_empty(&item.deleted),
                        untagged: non_empty(&item.untagged),
                    })
                    .collect();
                render_removal(&effects)
                    .iter()
                    .for_each(|line| println!("{line}"));
                println!(
                    "Total reclaimed space: {}",
                    format_size(response.space_reclaimed)
                );
            }
            OutputMode::Quiet => println!("{}", response.space_reclaimed),
            OutputMode::Json => self.json(response),
        }
    }

    pub fn runtime(&self, endpoint: &RuntimeInfo, metadata: &RuntimeMetadata) {
        match self.mode {
            OutputMode::Normal => {
                println!("Runtime:     {} {}", metadata.name, metadata.version);
                println!("Endpoint:    {}", endpoint.endpoint);
                println!("API version: {}", metadata.api_version);
                println!("Platform:    {}/{}", metadata.os, metadata.arch);
            }
            OutputMode::Quiet => println!("{}", metadata.version),
            OutputMode::Json => self.json(&serde_json::json!({
                "runtime": endpoint.runtime_type,
                "endpoint": endpoint.endpoint,
                "name": metadata.name,
                "version": metadata.version,
                "apiVersion": metadata.api_version,
                "os": metadata.os,
                "arch": metadata.arch,
            })),
        }
    }

    fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => println!("{json}"),
            Err(e) => self.error(&format!("failed to serialize output: {e}")),
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Render images as an aligned table with a header row.
pub fn render_image_table(images: &[Image]) -> Vec<String> {
    let rows: Vec<[String; 5]> = images
        .iter()
        .map(|i| {
            [
                i.name.clone(),
                i.tag.clone(),
                short_id(i.id.as_str()).to_string(),
                format_created(i.created),
                format_size(i.size),
            ]
        })
        .collect();

    let header = ["REPOSITORY", "TAG", "IMAGE ID", "CREATED", "SIZE"].map(String::from);
    let mut widths = header.clone().map(|h| h.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("   ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Render removal effects the way `docker rmi` reports them.
pub fn render_removal(effects: &[RemovalEffect]) -> Vec<String> {
    let mut lines = Vec::new();
    for effect in effects {
        if let Some(ref untagged) = effect.untagged {
            lines.push(format!("Untagged: {untagged}"));
        }
        if let Some(ref deleted) = effect.deleted {
            lines.push(format!("Deleted: {deleted}"));
        }
    }
    lines
}

/// Strip the digest algorithm and keep 12 hex characters.
pub fn short_id(id: &str) -> &str {
    let hex = id.split_once(':').map_or(id, |(_, hex)| hex);
    hex.get(..12).unwrap_or(hex)
}

/// Format a byte count with decimal units (`kB`, `MB`, ...).
pub fn format_size(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

    if bytes < 1000 {
        return format!("{bytes}B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{:.1}{}", value, UNITS[unit])
}

/// Format an epoch timestamp as UTC, or the raw number if out of range.
pub fn format_created(created: i64) -> String {
    chrono::DateTime::from_timestamp(created, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| created.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageId;

    fn image(name: &str, tag: &str) -> Image {
        Image {
            id: ImageId::new("sha256:0123456789abcdef0123"),
            name: name.to_string(),
            tag: tag.to_string(),
            size: 1024,
            created: 0,
        }
    }

    #[test]
    fn sizes_use_decimal_units() {
        assert_eq!(format_size(50), "50B");
        assert_eq!(format_size(1024), "1.0kB");
        assert_eq!(format_size(13_300_000), "13.3MB");
        assert_eq!(format_size(2_000_000_000), "2.0GB");
    }

    #[test]
    fn created_formats_as_utc() {
        assert_eq!(format_created(0), "1970-01-01 00:00:00");
        assert_eq!(format_created(100), "1970-01-01 00:01:40");
    }

    #[test]
    fn short_id_drops_algorithm() {
        assert_eq!(short_id("sha256:0123456789abcdef0123"), "0123456789ab");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn table_has_header_and_aligned_rows() {
        let lines = render_image_table(&[image("nginx", "latest"), image("<none>", "<none>")]);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("REPOSITORY"));
        assert!(lines[1].starts_with("nginx "));
        assert!(lines[2].starts_with("<none>"));
        assert_eq!(lines[1].find("latest"), lines[0].find("TAG"));
    }

    #[test]
    fn removal_lists_untagged_before_deleted() {
        let lines = render_removal(&[
            RemovalEffect::untagged("nginx:latest"),
            RemovalEffect::deleted("sha256:abc"),
        ]);
        assert_eq!(lines, vec!["Untagged: nginx:latest", "Deleted: sha256:abc"]);
    }

    #[test]
    fn output_mode_parses_lowercase() {
        let mode: OutputMode = serde_yaml::from_str("json").unwrap();
        assert_eq!(mode, OutputMode::Json);
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
