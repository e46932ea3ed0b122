use std::io::{self, Write};

use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::error::Result;
use crate::students::{repo, Student};
use crate::table::Table;

/// One parsed menu selection.
#[derive(Debug, PartialEq)]
pub enum MenuChoice {
    Create,
    List,
    Update,
    Delete,
    Quit,
    Unknown(String),
}

/// Map one input line to a menu choice.
pub fn parse_choice(input: &str) -> MenuChoice {
    match input.trim() {
        "1" => MenuChoice::Create,
        "2" => MenuChoice::List,
        "3" => MenuChoice::Update,
        "4" => MenuChoice::Delete,
        "5" => MenuChoice::Quit,
        other => MenuChoice::Unknown(other.to_string()),
    }
}

/// Run the menu loop until the operator quits or stdin reaches EOF.
///
/// Repository errors are logged and the loop continues; only the startup
/// steps in `main` are allowed to take the process down.
pub async fn run(config: &AppConfig) -> Result<()> {
    loop {
        print_menu();
        let Some(line) = prompt("> ")? else {
            break;
        };
        match parse_choice(&line) {
            MenuChoice::Create => handle_create(config).await?,
            MenuChoice::List => handle_list(config).await,
            MenuChoice::Update => handle_update(config).await?,
            MenuChoice::Delete => handle_delete(config).await?,
            MenuChoice::Quit => {
                info!("goodbye");
                break;
            }
            MenuChoice::Unknown(other) => warn!(input = %other, "invalid option"),
        }
    }
    Ok(())
}

fn print_menu() {
    println!("PostgreSQL Student CRUD");
    println!("1) Create  2) List  3) Update  4) Delete  5) Quit");
}

/// Print a prompt and read one trimmed line. `None` means EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

async fn handle_create(config: &AppConfig) -> Result<()> {
    let Some(name) = prompt("Name: ")? else {
        return Ok(());
    };
    let Some(email) = prompt("Email: ")? else {
        return Ok(());
    };
    match repo::create(config, &name, &email).await {
        Ok(id) => info!(id, "created student"),
        Err(e) => error!(error = %e, "create error"),
    }
    Ok(())
}

async fn handle_list(config: &AppConfig) {
    match repo::list(config).await {
        Ok(students) => println!("{}", render_students(&students)),
        Err(e) => error!(error = %e, "list error"),
    }
}

async fn handle_update(config: &AppConfig) -> Result<()> {
    let Some(id) = read_id()? else {
        return Ok(());
    };
    let Some(name) = prompt("New name (blank to skip): ")? else {
        return Ok(());
    };
    let Some(email) = prompt("New email (blank to skip): ")? else {
        return Ok(());
    };
    match repo::update(config, id, non_empty(&name), non_empty(&email)).await {
        Ok(count) => info!(rows = count, "updated"),
        Err(e) => error!(error = %e, "update error"),
    }
    Ok(())
}

async fn handle_delete(config: &AppConfig) -> Result<()> {
    let Some(id) = read_id()? else {
        return Ok(());
    };
    match repo::delete(config, id).await {
        Ok(count) => info!(rows = count, "deleted"),
        Err(e) => error!(error = %e, "delete error"),
    }
    Ok(())
}

/// Prompt for a student id. `None` on EOF or on a non-integer reply, which
/// is reported without touching the database.
fn read_id() -> Result<Option<i32>> {
    let Some(raw) = prompt("Student ID: ")? else {
        return Ok(None);
    };
    match raw.parse::<i32>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            warn!("invalid ID");
            Ok(None)
        }
    }
}

/// Blank input at an update prompt means "leave unchanged".
fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn render_students(students: &[Student]) -> String {
    let mut table = Table::new(&Student::COLUMNS);
    for student in students {
        table.push_row(student.cells());
    }
    table.render()
}
