//! Command-line interface over the flat-file store.

use clap::{CommandFactory, Parser};
use shelfstock_store::FileStore;

/// Manage the inventory data file.
#[derive(Debug, Parser)]
#[command(name = "shelfstock-store")]
struct Cli {
    /// Path of the JSON data file.
    #[arg(long, value_name = "PATH", default_value = "inventory.json")]
    file: std::path::PathBuf,

    /// List all items.
    #[arg(long)]
    list: bool,

    /// Get an item by id.
    #[arg(long, value_name = "ID")]
    get: Option<String>,

    /// Delete an item by id.
    #[arg(long, value_name = "ID")]
    delete: Option<String>,

    /// Add a new item (id and JSON string).
    #[arg(long, num_args = 2, value_names = ["ID", "JSON"])]
    add: Option<Vec<String>>,

    /// Update an existing item (id and JSON string).
    #[arg(long, num_args = 2, value_names = ["ID", "JSON"])]
    update: Option<Vec<String>>,
}

fn main() -> anyhow::Result<()> {
    shelfstock_observability::init();

    let cli = Cli::parse();
    let store = FileStore::new(&cli.file);

    if cli.list {
        for item in store.list()? {
            println!("{item}");
        }
    } else if let Some(id) = cli.get {
        match store.get(&id)? {
            Some(item) => println!("{item}"),
            None => println!("null"),
        }
    } else if let Some(id) = cli.delete {
        store.delete(&id)?;
    } else if let Some(args) = cli.add {
        let item = serde_json::from_str(&args[1])?;
        store.add(&args[0], item)?;
    } else if let Some(args) = cli.update {
        let item = serde_json::from_str(&args[1])?;
        store.update(&args[0], item)?;
    } else {
        Cli::command().print_help()?;
    }

    Ok(())
}
