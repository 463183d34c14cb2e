//! Command-line demo for the to-do store.
//!
//! With no arguments, walks through the seeded list: create, toggle,
//! remove. Otherwise each argument is applied as a JSON command, e.g.
//!
//! ```text
//! todos '{"type":"CREATE","text":"Buy milk"}' '{"type":"TOGGLE","id":4}'
//! ```
//!
//! The list is printed as JSON after every command.

use anyhow::Context;
use todos::{Todo, TodoAction, TodoId, TodosStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,todos_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    todos_runtime::metrics::describe_metrics();

    let store = TodosStore::new();
    print_todos("seed", &store.todos())?;

    let commands: Vec<String> = std::env::args().skip(1).collect();
    if commands.is_empty() {
        run_demo(&store)?;
    } else {
        for command in &commands {
            store
                .dispatch_json(command)
                .with_context(|| format!("failed to apply {command}"))?;
            print_todos(command, &store.todos())?;
        }
    }

    store.close();
    Ok(())
}

fn run_demo(store: &TodosStore) -> anyhow::Result<()> {
    let dispatcher = store.dispatcher();
    let steps = [
        TodoAction::create("Ship the todo store"),
        TodoAction::Toggle { id: TodoId::new(3) },
        TodoAction::Remove { id: TodoId::new(2) },
    ];

    for action in steps {
        let label = serde_json::to_string(&action)?;
        dispatcher.send(action)?;
        print_todos(&label, &store.todos())?;
    }

    let (done, total) = store.state(|s| (s.done_count(), s.len()));
    println!("Done: {done}/{total}");
    Ok(())
}

fn print_todos(label: &str, todos: &[Todo]) -> anyhow::Result<()> {
    println!(">>> {label}");
    println!("{}", serde_json::to_string_pretty(todos)?);
    Ok(())
}
