//! Status command - show the state of a saved draft.

use std::path::PathBuf;

use colored::Colorize;
use newsdesk::{ClassificationSession, Draft, NewsdeskError};

pub fn run(
    catalog: Option<&str>,
    file: PathBuf,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!(
            "Draft file not found: {}\nRun 'newsdesk classify --draft {}' first.",
            file.display(),
            file.display()
        )
        .into());
    }

    let draft = Draft::load(&file)?;
    let catalog = super::load_catalog(catalog)?;

    let session = match ClassificationSession::from_draft(draft.clone(), catalog) {
        Ok(session) => session,
        Err(NewsdeskError::StaleDraft { expected, found }) => {
            return Err(format!(
                "Draft {} was saved against catalog {} but the current catalog is {}.\nReclassify the content.",
                file.display(),
                expected,
                found
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    let engine = session.engine();
    let submission = session.submission();

    if json_output {
        let status = serde_json::json!({
            "file": file.display().to_string(),
            "format_version": draft.newsdesk_version,
            "created_at": session.created_at(),
            "updated_at": session.updated_at(),
            "selection": session.selection(),
            "selected_categories": engine.selected_categories(),
            "primary_category": engine.primary_category(),
            "ready": submission.is_ok(),
            "validation_error": submission.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Draft status for".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    let mode = if session.selection().is_edit() {
        "authoring"
    } else {
        "filter"
    };
    println!("Mode:     {}", mode);
    if let Some(group) = session.selection().group() {
        println!("Main:     {} {}", group.icon(), group.label().white().bold());
    }
    println!("Updated:  {}", session.updated_at().format("%Y-%m-%d %H:%M UTC"));
    println!();

    println!("{}", "Sub-categories:".yellow().bold());
    let primary = engine.primary_category().map(|c| c.category_id);
    for category in engine.selected_categories() {
        let tag = if Some(category.category_id) == primary {
            " (primary)".magenta().to_string()
        } else {
            String::new()
        };
        println!("  {:>6}  {}{}", category.category_id, category.name, tag);
    }
    println!();

    match submission {
        Ok(_) => println!("{}", "Ready to save.".green().bold()),
        Err(e) => println!("{} {}", "Not ready:".red(), e),
    }

    Ok(())
}
