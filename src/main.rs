use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jimmystore::AppError;
use jimmystore::domain::{FilterCriteria, ItemDraft, ItemPatch, StatusFilter};

#[derive(Parser)]
#[command(name = "jimmystore")]
#[command(version)]
#[command(about = "Browse and manage the JimmyStore catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog items with optional filters
    #[clap(visible_alias = "b")]
    Browse {
        /// Only show items in this category (mice, mousepads)
        #[arg(short, long)]
        category: Option<String>,
        /// Only show sold items
        #[arg(long, conflicts_with = "available")]
        sold: bool,
        /// Only show available items
        #[arg(long, conflicts_with = "sold")]
        available: bool,
        /// Case-insensitive substring match against item titles
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Log in as the store admin
    Login {
        /// Admin username
        username: String,
        /// Admin password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored admin session
    Logout,
    /// Add a catalog item
    #[clap(visible_alias = "a")]
    Add {
        /// Item title
        #[arg(short, long)]
        title: String,
        /// Price, e.g. 49.99
        #[arg(short, long)]
        price: String,
        /// Category (mice, mousepads)
        #[arg(short, long)]
        category: String,
        /// Image file to upload
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Edit fields of an existing item
    #[clap(visible_alias = "e")]
    Edit {
        /// Item id
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New price
        #[arg(short, long)]
        price: Option<String>,
        /// New category (mice, mousepads)
        #[arg(short, long)]
        category: Option<String>,
        /// Replacement image file to upload
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Delete an item
    Rm {
        /// Item id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Toggle an item's sold flag
    Sold {
        /// Item id
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Browse { category, sold, available, search } => {
            run_browse(category, sold, available, search)
        }
        Commands::Login { username, password } => jimmystore::login(&username, password),
        Commands::Logout => jimmystore::logout(),
        Commands::Add { title, price, category, image } => {
            jimmystore::add_item(&ItemDraft { title, price, category, image })
        }
        Commands::Edit { id, title, price, category, image } => {
            ItemPatch::from_edit(title, price, category, image)
                .map_err(AppError::from)
                .and_then(|patch| jimmystore::edit_item(&id, &patch))
        }
        Commands::Rm { id, yes } => jimmystore::remove_item(&id, yes),
        Commands::Sold { id } => jimmystore::toggle_sold(&id),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_browse(
    category: Option<String>,
    sold: bool,
    available: bool,
    search: Option<String>,
) -> Result<(), AppError> {
    let category = category.as_deref().map(|raw| raw.parse()).transpose()?;
    let status = if sold {
        StatusFilter::SoldOnly
    } else if available {
        StatusFilter::AvailableOnly
    } else {
        StatusFilter::All
    };

    let criteria = FilterCriteria { category, status, search: search.unwrap_or_default() };
    jimmystore::browse(&criteria)
}
