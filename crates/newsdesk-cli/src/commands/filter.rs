//! Filter command - build a listing filter across main categories.

use std::collections::BTreeMap;

use colored::Colorize;
use newsdesk::{CategoryId, ClassificationSession};

pub fn run(
    catalog: Option<&str>,
    toggles: Vec<CategoryId>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::load_catalog(catalog)?;
    let mut session = ClassificationSession::filter(catalog.clone());

    for id in toggles {
        session.toggle(id);
        if !catalog.contains(id) {
            tracing::warn!(category_id = id, "filtering on a category missing from the catalog");
        }
    }

    let engine = session.engine();
    let query = session.filter_query();

    if json_output {
        let params: BTreeMap<_, _> = query.query_pairs()?.into_iter().collect();
        let output = serde_json::json!({
            "selection": session.selection(),
            "groups": engine.group_summaries(),
            "query": params,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Filter by category".cyan().bold());
    println!();

    for summary in engine.group_summaries() {
        let count = format!("{}/{}", summary.selected, summary.total);
        let count = if summary.selected > 0 {
            count.green().bold()
        } else {
            count.dimmed()
        };
        println!("  {} {:<14} {}", summary.icon, summary.label, count);
    }
    println!();

    let selected = engine.selected_categories();
    if selected.is_empty() {
        println!("No categories selected; listing is unfiltered.");
    } else {
        println!("{}", "Selected:".yellow().bold());
        for category in selected {
            println!("  {:>6}  {}", category.category_id, category.name);
        }
        println!();
        for (name, value) in query.query_pairs()? {
            println!("Query: {}={}", name, value.white());
        }
    }

    Ok(())
}
