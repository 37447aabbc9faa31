//! Groups command - list main categories and their sub-categories.

use colored::Colorize;
use newsdesk::{Engine, Selection};

pub fn run(catalog: Option<&str>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::load_catalog(catalog)?;
    let selection = Selection::filter([]);
    let engine = Engine::new(&catalog, &selection);

    if json_output {
        let groups: Vec<_> = engine
            .group_summaries()
            .into_iter()
            .map(|summary| {
                serde_json::json!({
                    "group": summary.group,
                    "label": summary.label,
                    "icon": summary.icon,
                    "color": summary.color,
                    "total": summary.total,
                    "categories": engine.sub_categories_for(summary.group),
                })
            })
            .collect();
        let output = serde_json::json!({
            "source": catalog.stats().source,
            "total_categories": catalog.len(),
            "ungrouped": catalog.ungrouped(),
            "groups": groups,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Main categories from".cyan().bold(),
        catalog.stats().source.white()
    );
    println!();

    for summary in engine.group_summaries() {
        println!(
            "{} {:<14} {:<14} {}",
            summary.icon,
            summary.label.white().bold(),
            format!("({})", summary.group).dimmed(),
            format!("{} sub-categories", summary.total).cyan()
        );
        for category in engine.sub_categories_for(summary.group) {
            println!("    {:>6}  {}", category.category_id, category.name);
        }
    }

    let ungrouped = catalog.ungrouped();
    if !ungrouped.is_empty() {
        println!();
        println!(
            "{} {} categories have no main category and can only be used in filters:",
            "Note:".yellow(),
            ungrouped.len()
        );
        for category in ungrouped {
            println!("    {:>6}  {} ({})", category.category_id, category.name, category.slug);
        }
    }

    Ok(())
}
