//! Interactive terminal rendition of the prospect page.

use crate::backend::GeneratedEmail;
use crate::commands::{self, AppState, NO_PROSPECTS_MESSAGE};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const TITLE: &str = "Cold Email Generator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    SelectProspect,
    ViewDetails,
    ViewMarkup,
    Generate,
    Feedback,
    Reload,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::SelectProspect => "Select a prospect",
            Action::ViewDetails => "View lead's details (JSON)",
            Action::ViewMarkup => "View lead's details (HTML)",
            Action::Generate => "Generate cold email",
            Action::Feedback => "Provide feedback on the email",
            Action::Reload => "Reload page",
            Action::Quit => "Quit",
        }
    }
}

/// Actions that make sense in the current state, in menu order.
fn available_actions(state: &AppState) -> Vec<Action> {
    if state.page.state().is_terminal() {
        return vec![Action::Reload, Action::Quit];
    }
    let mut actions = vec![Action::SelectProspect];
    if state.page.selected().is_some() {
        actions.extend([Action::ViewDetails, Action::ViewMarkup, Action::Generate]);
    }
    if state.session.email().is_some() {
        actions.push(Action::Feedback);
    }
    actions.extend([Action::Reload, Action::Quit]);
    actions
}

pub async fn run_page(mut state: AppState) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();

    println!("\n{}", "=".repeat(60));
    println!("  {}", TITLE.bold());
    println!("{}\n", "=".repeat(60));

    if state.has_prospects() {
        choose_prospect(&mut state, &theme)?;
    }

    loop {
        if !state.has_prospects() {
            println!("{}", NO_PROSPECTS_MESSAGE.yellow());
        }
        print_status(&state);

        let actions = available_actions(&state);
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            Action::SelectProspect => choose_prospect(&mut state, &theme)?,
            Action::ViewDetails => show(commands::prospect_json(&state)),
            Action::ViewMarkup => show(commands::prospect_markup(&state)),
            Action::Generate => {
                println!("Generating email...");
                match commands::generate_email(&mut state).await {
                    Ok(email) => print_email(&email),
                    Err(message) => print_error(&message),
                }
            }
            Action::Feedback => collect_feedback(&mut state, &theme).await?,
            Action::Reload => show(commands::reload_page(&mut state).await),
            Action::Quit => break,
        }
    }

    Ok(())
}

fn choose_prospect(state: &mut AppState, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let index = state.page.index();
    let current = state
        .page
        .selected()
        .and_then(|p| index.entries().iter().position(|e| e.id == p.id))
        .unwrap_or(0);

    let choice = Select::with_theme(theme)
        .with_prompt("Select a prospect")
        .items(&index.labels())
        .default(current)
        .interact()?;
    let id = index.entries()[choice].id.clone();

    show(commands::select_prospect(state, &id));
    Ok(())
}

async fn collect_feedback(state: &mut AppState, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let comment: String = Input::with_theme(theme)
        .with_prompt("Provide feedback on the email")
        .with_initial_text(state.session.draft.comment.clone())
        .allow_empty(true)
        .interact_text()?;

    let name_prompt = if state.page.require_person_name() {
        "Your name"
    } else {
        "Your name (optional)"
    };
    let person_name: String = Input::with_theme(theme)
        .with_prompt(name_prompt)
        .with_initial_text(state.session.draft.person_name.clone())
        .allow_empty(true)
        .interact_text()?;

    commands::set_feedback(state, &comment, &person_name);
    show(commands::submit_feedback(state).await);
    Ok(())
}

fn print_status(state: &AppState) {
    let selected = state
        .page
        .selected()
        .and_then(|p| p.name())
        .unwrap_or("none");
    let email = state
        .session
        .email()
        .map(|e| format!("{} ({})", e.email_id, e.received_at.format("%H:%M:%S")))
        .unwrap_or_else(|| "none".to_string());
    println!(
        "\n{} {}   {} {}",
        "Prospect:".dimmed(),
        selected,
        "Email:".dimmed(),
        email
    );
}

fn print_email(email: &GeneratedEmail) {
    println!(
        "\n{} {}",
        "Generated Email".bold().underline(),
        email.received_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
    );
    println!("{}", "-".repeat(60));
    println!("{}", email.content);
    println!("{}\n", "-".repeat(60));
}

fn show(result: Result<String, String>) {
    match result {
        Ok(text) => println!("\n{}", text),
        Err(message) => print_error(&message),
    }
}

fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}
