use std::collections::HashMap;

use crate::models::{ChartSeries, Dataset, GroupEntry, GroupSummary, SurveySummary};

const CHART_TOP_COUNTRIES: usize = 10;
const SUMMARY_TOP_COUNTRIES: usize = 5;

/// Mean of `value_col` per distinct value of `group_col`, in first-encounter
/// order. Returns `None` when either column is missing from the dataset so
/// the metric drops out instead of failing. Rows whose value cell does not
/// parse as a number are skipped, and a group with no usable values never
/// appears in the result.
pub fn grouped_mean(dataset: &Dataset, group_col: &str, value_col: &str) -> Option<GroupSummary> {
    if !dataset.has_columns(&[group_col, value_col]) {
        return None;
    }
    let group_idx = dataset.column_index(group_col)?;
    let value_idx = dataset.column_index(value_col)?;

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (f64, usize)> = HashMap::new();

    for row in dataset.rows() {
        let group = match row.get(group_idx) {
            Some(group) => group,
            None => continue,
        };
        let value = match row.get(value_idx).and_then(|cell| cell.trim().parse::<f64>().ok()) {
            Some(value) => value,
            None => continue,
        };

        if !totals.contains_key(group) {
            order.push(group.clone());
        }
        let entry = totals.entry(group.clone()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let entries = order
        .into_iter()
        .filter_map(|group| {
            let (total, count) = totals.remove(&group)?;
            Some(GroupEntry {
                mean: total / count as f64,
                group,
            })
        })
        .collect();

    Some(GroupSummary { entries })
}

/// Stable descending sort, so equal means keep first-encounter order.
fn top_by_mean(mut summary: GroupSummary, n: usize) -> GroupSummary {
    summary.entries.sort_by(|a, b| {
        b.mean
            .partial_cmp(&a.mean)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    summary.entries.truncate(n);
    summary
}

fn rounded(mut summary: GroupSummary) -> GroupSummary {
    for entry in &mut summary.entries {
        entry.mean = (entry.mean * 100.0).round() / 100.0;
    }
    summary
}

pub fn compute_chart_series(dataset: &Dataset) -> Vec<ChartSeries> {
    let mut series = Vec::new();

    if let Some(summary) = grouped_mean(dataset, "country", "drinks_per_week") {
        series.push(ChartSeries {
            title: "Average Drinks per Week by Country (Top 10)".to_string(),
            y_label: "Drinks per Week".to_string(),
            summary: top_by_mean(summary, CHART_TOP_COUNTRIES),
        });
    }

    if let Some(summary) = grouped_mean(dataset, "gender", "smokes_per_day") {
        series.push(ChartSeries {
            title: "Average Smokes per Day by Gender".to_string(),
            y_label: "Smokes per Day".to_string(),
            summary,
        });
    }

    series
}

pub fn compute_summary(dataset: &Dataset) -> SurveySummary {
    SurveySummary {
        top_countries_by_drinks: grouped_mean(dataset, "country", "drinks_per_week")
            .map(|summary| rounded(top_by_mean(summary, SUMMARY_TOP_COUNTRIES))),
        avg_smokes_by_gender: grouped_mean(dataset, "gender", "smokes_per_day").map(rounded),
    }
}
