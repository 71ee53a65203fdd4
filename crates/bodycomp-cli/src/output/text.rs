//! Text and table output formatting.

use bodycomp_core::range::fat_percent_domain;
use bodycomp_core::{BodyEntry, ChartPoint, Summary, TimeRange};

use crate::ui::theme::{styled, trend_symbol, verdict_style};
use crate::ui::{
    blank_line, divider, format_date, format_value, format_with_unit, header, hint, kv, print,
    short_id, simple_table, table, Column, UiContext,
};

use super::{entries_json, history_json, summary_json};

/// Print a list of entries (already ordered by the caller).
pub fn print_entry_list(
    ui: UiContext,
    entries: &[BodyEntry],
    range: TimeRange,
    quiet: bool,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(entries))?);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            print(&ui, "No entries found.");
            print(&ui, &hint(&ui, "Log a scan with `bodycomp add`."));
        }
        return Ok(());
    }

    let pretty = ui.mode.is_pretty();
    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::numeric("Weight (kg)"),
        Column::numeric("Muscle (kg)"),
        Column::numeric("Fat (kg)"),
        Column::numeric("Fat (%)"),
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            vec![
                if pretty {
                    short_id(&entry.id)
                } else {
                    entry.id.clone()
                },
                format_date(&entry.date, pretty),
                format_value(entry.body_weight),
                format_value(entry.skeletal_muscle_mass),
                format_value(entry.body_fat_mass),
                format_value(entry.body_fat_percentage),
            ]
        })
        .collect();

    if pretty && !quiet {
        print(&ui, &header(&ui, "list", Some(range.label())));
        blank_line(&ui);
    }
    print(&ui, &simple_table(&ui, &columns, &rows));
    Ok(())
}

/// Print the summary cards.
pub fn print_summary(
    ui: UiContext,
    summary: &Summary,
    quiet: bool,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&summary_json(summary))?);
        return Ok(());
    }

    let Some(latest_date) = summary.latest_date else {
        if !quiet {
            print(&ui, "No entries yet.");
            print(&ui, &hint(&ui, "Log a scan with `bodycomp add`."));
        }
        return Ok(());
    };

    if !ui.mode.is_pretty() {
        print(&ui, &kv(&ui, "Date", &format_date(&latest_date, false)));
        for card in summary.cards() {
            let key = card.metric.title().to_lowercase().replace(' ', "_");
            let latest = card.latest.map(format_value).unwrap_or_default();
            let delta = card.delta.map(format_value).unwrap_or_default();
            print(&ui, &format!("{}={}", key, latest));
            print(&ui, &format!("{}_delta={}", key, delta));
        }
        return Ok(());
    }

    let pretty_date = format_date(&latest_date, true);
    if !quiet {
        print(&ui, &header(&ui, "summary", Some(&pretty_date)));
        print(&ui, &divider(&ui));
    }
    for card in summary.cards() {
        let unit = card.metric.unit();
        let latest = card
            .latest
            .map(|v| format_with_unit(v, unit))
            .unwrap_or_else(|| "-".to_string());
        let line = match card.delta_label() {
            Some(label) => {
                let arrow = trend_symbol(card.delta, ui.unicode);
                let change = if arrow.is_empty() {
                    label
                } else {
                    format!("{} {}", arrow, label)
                };
                format!(
                    "{}  {}",
                    latest,
                    styled(&change, verdict_style(card.verdict), ui.color)
                )
            }
            None => latest,
        };
        print(&ui, &kv(&ui, card.metric.title(), &line));
    }
    if let Some(previous) = summary.previous_date.filter(|_| !quiet) {
        blank_line(&ui);
        print(
            &ui,
            &hint(&ui, &format!("Compared with {}.", format_date(&previous, true))),
        );
    }
    Ok(())
}

/// Print the composition series for a time range.
pub fn print_history(
    ui: UiContext,
    range: TimeRange,
    points: &[ChartPoint],
    quiet: bool,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&history_json(range, points))?
        );
        return Ok(());
    }

    if points.is_empty() {
        if !quiet {
            print(&ui, &format!("No entries in range {}.", range.as_str()));
        }
        return Ok(());
    }

    let pretty = ui.mode.is_pretty();
    let columns = [
        Column::new("Date"),
        Column::numeric("Weight"),
        Column::numeric("Muscle"),
        Column::numeric("Fat mass"),
        Column::numeric("Other"),
        Column::numeric("Fat %"),
    ];
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                format_date(&p.date, pretty),
                format_value(p.weight),
                format_value(p.muscle),
                format_value(p.fat_mass),
                format_value(p.other),
                format_value(p.fat_percent),
            ]
        })
        .collect();

    if pretty && !quiet {
        print(&ui, &header(&ui, "history", Some(range.label())));
    }
    print(&ui, &table(&ui, &columns, &rows));
    if pretty && !quiet {
        let (low, high) = fat_percent_domain(points);
        print(
            &ui,
            &kv(&ui, "Fat % axis", &format!("{:.0} to {:.0}", low, high)),
        );
    }
    Ok(())
}
