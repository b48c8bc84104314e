use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::models::ChartSeries;

/// Write each series as a JSON file the chart renderer can pick up.
/// Rasterization happens downstream; this only emits the data.
pub fn write_chart_files(series: &[ChartSeries], out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();
    for chart in series {
        let path = out_dir.join(format!("{}.json", slug(&chart.title)));
        let payload = serde_json::to_string_pretty(chart)?;
        std::fs::write(&path, payload)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

fn slug(title: &str) -> String {
    let mut out = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') && !out.is_empty() {
            out.push('_');
        }
    }
    out.trim_end_matches('_').to_string()
}
