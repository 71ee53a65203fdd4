use std::collections::HashMap;

use bodycomp_core::{BodyEntry, EntryStore};

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge};

/// Problems found in a readable store.
fn audit(entries: &[BodyEntry]) -> Vec<String> {
    let mut problems = Vec::new();

    let mut dates: HashMap<_, Vec<&str>> = HashMap::new();
    let mut ids: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        dates.entry(entry.date).or_default().push(entry.id.as_str());
        *ids.entry(entry.id.as_str()).or_default() += 1;
        if let Err(err) = entry.measurement().validate() {
            problems.push(format!("entry {}: {}", entry.id, err));
        }
    }

    let mut duplicate_dates: Vec<_> = dates.into_iter().filter(|(_, v)| v.len() > 1).collect();
    duplicate_dates.sort_by_key(|(date, _)| *date);
    for (date, owners) in duplicate_dates {
        problems.push(format!("duplicate date {}: {}", date, owners.join(", ")));
    }

    let mut duplicate_ids: Vec<_> = ids.into_iter().filter(|(_, n)| *n > 1).collect();
    duplicate_ids.sort();
    for (id, count) in duplicate_ids {
        problems.push(format!("duplicate id {} ({} entries)", id, count));
    }

    problems
}

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui = ctx.ui_context(false, None);

    let entries = match store.read_slot() {
        Ok(Some(entries)) => entries,
        Ok(None) => {
            if !ctx.quiet() {
                print(&ui, &badge(&ui, Badge::Warn, "Store has not been created yet"));
            }
            return Ok(());
        }
        Err(err) => return Err(CliError::from(err).into()),
    };

    let problems = audit(&entries);
    if problems.is_empty() {
        if !ctx.quiet() {
            print(
                &ui,
                &badge(
                    &ui,
                    Badge::Ok,
                    &format!("Integrity check: OK ({} entries)", entries.len()),
                ),
            );
        }
        return Ok(());
    }

    for problem in &problems {
        eprintln!("- {}", problem);
    }
    Err(CliError::IntegrityFailed(format!(
        "Integrity check failed: {} problem(s)\nHint: Fix the entries with `bodycomp edit` or `bodycomp delete`.",
        problems.len()
    ))
    .into())
}
