use std::fmt::Write;

use crate::aggregate;
use crate::models::Dataset;

pub fn build_report(dataset: &Dataset) -> String {
    let summary = aggregate::compute_summary(dataset);

    let mut output = String::new();
    let _ = writeln!(output, "# Habit Survey Report");
    let _ = writeln!(output, "Based on {} survey responses", dataset.len());
    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Countries by Average Drinks per Week");

    match summary.top_countries_by_drinks {
        Some(countries) if !countries.entries.is_empty() => {
            for entry in countries.entries.iter() {
                let _ = writeln!(
                    output,
                    "- {}: {:.2} drinks per week",
                    entry.group, entry.mean
                );
            }
        }
        _ => {
            let _ = writeln!(output, "No country drinking data in this dataset.");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Average Smokes per Day by Gender");

    match summary.avg_smokes_by_gender {
        Some(genders) if !genders.entries.is_empty() => {
            for entry in genders.entries.iter() {
                let _ = writeln!(
                    output,
                    "- {}: {:.2} smokes per day",
                    entry.group, entry.mean
                );
            }
        }
        _ => {
            let _ = writeln!(output, "No gender smoking data in this dataset.");
        }
    }

    output
}
