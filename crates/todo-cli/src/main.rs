//! Todo administration CLI.
//!
//! Provides the `todo` binary, which works directly on the SQLite database
//! the HTTP server uses. Input goes through the same validator as the API,
//! so a todo written here is indistinguishable from one created over HTTP.
//!
//! Results are printed as JSON on stdout; errors go to stderr with exit
//! codes 1 (invalid input), 3 (storage failure) and 4 (no such todo).

use std::process;

use clap::{Parser, Subcommand};
use serde_json::Value;

use todo_core::{resolve_status, validate_id, TodoDraft, TodoId, TodoPayload, ValidationError};
use todo_storage::{SqliteStore, StorageError, TodoStore};

/// Manage todos stored in a local database.
#[derive(Parser)]
#[command(name = "todo", about = "Manage todos stored in a local database")]
struct Cli {
    /// Path to the todo database file.
    #[arg(short, long, default_value = "todos.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every todo.
    List,

    /// Print one todo.
    Show {
        /// Todo id.
        id: String,
    },

    /// Create a todo.
    Add {
        /// Title; whitespace is normalized.
        title: String,

        /// Optional description (max 1000 characters).
        #[arg(long)]
        description: Option<String>,

        /// incomplete, in-progress, complete or archived.
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Change the status of a todo, keeping title and description.
    SetStatus {
        /// Todo id.
        id: String,

        /// New status; unknown values fall back to incomplete.
        status: String,
    },

    /// Delete a todo.
    Remove {
        /// Todo id.
        id: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("todo {0} not found")]
    NotFound(TodoId),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Invalid(_) => 1,
            CliError::Storage(_) => 3,
            CliError::NotFound(_) => 4,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let mut store = match SqliteStore::new(&cli.db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", cli.db, e);
            process::exit(3);
        }
    };

    match execute(&mut store, cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Runs one subcommand and renders its result as pretty JSON.
fn execute(store: &mut dyn TodoStore, command: Commands) -> Result<String, CliError> {
    let value = match command {
        Commands::List => serde_json::json!(store.list_all()?),
        Commands::Show { id } => {
            let id = validate_id(&id)?;
            let todo = store.get_by_id(id)?.ok_or(CliError::NotFound(id))?;
            serde_json::json!(todo)
        }
        Commands::Add {
            title,
            description,
            status,
        } => {
            let payload = TodoPayload {
                title: Some(Value::String(title)),
                description: description.map(Value::String),
                status: status.map(Value::String),
            };
            let draft = payload.validate()?;
            store.insert(&draft)?;
            let created = store
                .most_recently_inserted()?
                .ok_or_else(|| StorageError::Backend("inserted todo not found".into()))?;
            serde_json::json!(created)
        }
        Commands::SetStatus { id, status } => {
            let id = validate_id(&id)?;
            let current = store.get_by_id(id)?.ok_or(CliError::NotFound(id))?;
            let draft = TodoDraft {
                title: current.title,
                description: current.description,
                status: resolve_status(Some(&Value::String(status))),
            };
            if !store.update(id, &draft)?.touched_any() {
                return Err(CliError::NotFound(id));
            }
            let updated = store.get_by_id(id)?.ok_or(CliError::NotFound(id))?;
            serde_json::json!(updated)
        }
        Commands::Remove { id } => {
            let id = validate_id(&id)?;
            if !store.delete_by_id(id)?.touched_any() {
                return Err(CliError::NotFound(id));
            }
            serde_json::json!({ "success": true })
        }
    };
    Ok(serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()))
}
