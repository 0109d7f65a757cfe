//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use depot_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "depot")]
#[command(version)]
#[command(about = "Terminal client for the depot inventory backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session locally
    Login {
        /// Username to log in as
        #[arg(value_name = "USERNAME")]
        username: String,
        /// Password (read from stdin when omitted)
        #[arg(value_name = "PASSWORD")]
        password: Option<String>,
    },
    /// Create an account
    Register {
        #[arg(value_name = "USERNAME")]
        username: String,
        #[arg(value_name = "PASSWORD")]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage product categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Inspect and adjust stock
    Stock {
        #[command(subcommand)]
        command: StockCommands,
    },
    /// Manage suppliers
    Suppliers {
        #[command(subcommand)]
        command: SupplierCommands,
    },
    /// Manage purchase orders
    Orders {
        #[command(subcommand)]
        command: OrderCommands,
    },
    /// Run reports
    Reports {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

#[derive(clap::Subcommand)]
enum CategoryCommands {
    /// List categories
    List,
    /// Show a single category
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Create a category
    Add {
        #[arg(value_name = "NAME")]
        name: String,
        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Update a category
    Update {
        #[arg(value_name = "ID")]
        id: i64,
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a category
    Remove {
        #[arg(value_name = "ID")]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(clap::Subcommand)]
enum ProductCommands {
    /// List products
    List {
        /// Only products in this category
        #[arg(long, value_name = "CATEGORY_ID")]
        category: Option<i64>,
    },
    /// Show a single product
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Create a product
    Add {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        #[arg(long, value_name = "CATEGORY_ID")]
        category: i64,
        /// Initial stock quantity
        #[arg(long, default_value_t = 0)]
        stock: i64,
    },
    /// Update a product
    Update {
        #[arg(value_name = "ID")]
        id: i64,
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        #[arg(long, value_name = "CATEGORY_ID")]
        category: i64,
    },
    /// Delete a product
    Remove {
        #[arg(value_name = "ID")]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List suppliers that carry a product
    Suppliers {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum StockCommands {
    /// List stock levels
    List,
    /// Set the stock quantity of a product
    Set {
        #[arg(value_name = "PRODUCT_ID")]
        product_id: i64,
        #[arg(value_name = "QUANTITY")]
        quantity: i64,
    },
    /// List products at or below the low-stock threshold
    Low,
    /// Show aggregate stock statistics
    Stats,
}

#[derive(clap::Subcommand)]
enum SupplierCommands {
    /// List suppliers
    List,
    /// Create a supplier
    Add {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Delete a supplier
    Remove {
        #[arg(value_name = "ID")]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Link a product to a supplier
    Link {
        #[arg(value_name = "SUPPLIER_ID")]
        supplier_id: i64,
        #[arg(value_name = "PRODUCT_ID")]
        product_id: i64,
    },
    /// Remove a product/supplier link
    Unlink {
        #[arg(value_name = "SUPPLIER_ID")]
        supplier_id: i64,
        #[arg(value_name = "PRODUCT_ID")]
        product_id: i64,
    },
    /// List products carried by a supplier
    Products {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum OrderCommands {
    /// List orders
    List,
    /// Show a single order
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Create an order from PRODUCT_ID:QUANTITY pairs
    Add {
        /// Order line, repeatable (e.g. --item 3:10)
        #[arg(long = "item", value_name = "PRODUCT_ID:QUANTITY", required = true)]
        items: Vec<String>,
    },
    /// Confirm a pending order (moves stock)
    Confirm {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Delete an order
    Remove {
        #[arg(value_name = "ID")]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(clap::Subcommand)]
enum ReportCommands {
    /// Most ordered products
    Popular {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Inventory summary with per-category breakdown
    Inventory,
    /// Order counts by status
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // default to the dashboard
    let Some(command) = cli.command else {
        return depot_tui::run_dashboard(&config).await;
    };

    match command {
        Commands::Login { username, password } => {
            commands::auth::login(&config, &username, password).await
        }
        Commands::Register { username, password } => {
            commands::auth::register(&config, &username, &password).await
        }
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },

        Commands::Categories { command } => match command {
            CategoryCommands::List => commands::categories::list(&config).await,
            CategoryCommands::Show { id } => commands::categories::show(&config, id).await,
            CategoryCommands::Add { name, description } => {
                commands::categories::add(&config, &name, &description).await
            }
            CategoryCommands::Update {
                id,
                name,
                description,
            } => commands::categories::update(&config, id, &name, &description).await,
            CategoryCommands::Remove { id, yes } => {
                commands::categories::remove(&config, id, yes).await
            }
        },

        Commands::Products { command } => match command {
            ProductCommands::List { category } => {
                commands::products::list(&config, category).await
            }
            ProductCommands::Show { id } => commands::products::show(&config, id).await,
            ProductCommands::Add {
                name,
                price,
                category,
                stock,
            } => commands::products::add(&config, &name, price, category, stock).await,
            ProductCommands::Update {
                id,
                name,
                price,
                category,
            } => commands::products::update(&config, id, &name, price, category).await,
            ProductCommands::Remove { id, yes } => {
                commands::products::remove(&config, id, yes).await
            }
            ProductCommands::Suppliers { id } => {
                commands::products::suppliers(&config, id).await
            }
        },

        Commands::Stock { command } => match command {
            StockCommands::List => commands::stock::list(&config).await,
            StockCommands::Set {
                product_id,
                quantity,
            } => commands::stock::set(&config, product_id, quantity).await,
            StockCommands::Low => commands::stock::low(&config).await,
            StockCommands::Stats => commands::stock::stats(&config).await,
        },

        Commands::Suppliers { command } => match command {
            SupplierCommands::List => commands::suppliers::list(&config).await,
            SupplierCommands::Add { name, phone, email } => {
                commands::suppliers::add(&config, &name, &phone, &email).await
            }
            SupplierCommands::Remove { id, yes } => {
                commands::suppliers::remove(&config, id, yes).await
            }
            SupplierCommands::Link {
                supplier_id,
                product_id,
            } => commands::suppliers::link(&config, supplier_id, product_id).await,
            SupplierCommands::Unlink {
                supplier_id,
                product_id,
            } => commands::suppliers::unlink(&config, supplier_id, product_id).await,
            SupplierCommands::Products { id } => {
                commands::suppliers::products(&config, id).await
            }
        },

        Commands::Orders { command } => match command {
            OrderCommands::List => commands::orders::list(&config).await,
            OrderCommands::Show { id } => commands::orders::show(&config, id).await,
            OrderCommands::Add { items } => commands::orders::add(&config, &items).await,
            OrderCommands::Confirm { id } => commands::orders::confirm(&config, id).await,
            OrderCommands::Remove { id, yes } => {
                commands::orders::remove(&config, id, yes).await
            }
        },

        Commands::Reports { command } => match command {
            ReportCommands::Popular { limit } => {
                commands::reports::popular(&config, limit).await
            }
            ReportCommands::Inventory => commands::reports::inventory(&config).await,
            ReportCommands::Status => commands::reports::status(&config).await,
        },
    }
}
