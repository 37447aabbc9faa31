//! Classify command - replay authoring commands and print the result.

use std::path::PathBuf;

use colored::Colorize;
use newsdesk::{CategoryId, ClassificationSession, MainGroup};

pub fn run(
    catalog: Option<&str>,
    group: MainGroup,
    toggles: Vec<CategoryId>,
    primary: Option<CategoryId>,
    draft: Option<PathBuf>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::load_catalog(catalog)?;
    let mut session = ClassificationSession::edit(catalog);
    session.select_main_group(group);

    let mut notices = Vec::new();
    for id in toggles {
        if !session.toggle(id).success {
            if let Some(notice) = session.take_notice() {
                notices.push((id, notice.message));
            }
        }
    }

    if let Some(id) = primary {
        if !session.set_primary(id).success {
            if let Some(notice) = session.take_notice() {
                notices.push((id, notice.message));
            }
        }
    }

    if let Some(path) = &draft {
        session.save(path)?;
    }

    let engine = session.engine();
    let submission = session.submission();

    if json_output {
        let output = serde_json::json!({
            "selection": session.selection(),
            "primary_category": engine.primary_category(),
            "rejected": notices
                .iter()
                .map(|(id, message)| serde_json::json!({ "category_id": id, "message": message }))
                .collect::<Vec<_>>(),
            "submission": submission.as_ref().ok(),
            "validation_error": submission.as_ref().err().map(|e| e.to_string()),
            "draft": draft.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        "Main category:".cyan().bold(),
        group.icon(),
        group.label().white().bold()
    );
    println!();

    for (id, message) in &notices {
        println!("{} {} {}", "Rejected".yellow(), id.to_string().white(), message);
    }
    if !notices.is_empty() {
        println!();
    }

    let primary_id = session.selection().primary_id();
    println!("{}", "Sub-categories:".yellow().bold());
    for state in engine.category_states(group) {
        let category = state.category;
        let marker = if state.selected {
            "[x]".green()
        } else if state.disabled_reason.is_some() {
            "[-]".dimmed()
        } else {
            "[ ]".normal()
        };
        let primary_tag = if primary_id == Some(category.category_id) {
            " (primary)".magenta().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {:>6}  {}{}",
            marker, category.category_id, category.name, primary_tag
        );
    }
    println!();

    match submission {
        Ok(submission) => {
            println!("{}", "Submission fields:".yellow().bold());
            for (name, value) in submission.form_fields()? {
                println!("  {} = {}", name, value.white());
            }
        }
        Err(e) => println!("{} {}", "Not ready to save:".red(), e),
    }

    if let Some(path) = draft {
        println!();
        println!("Draft saved to {}", path.display().to_string().cyan());
    }

    Ok(())
}
