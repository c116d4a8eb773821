pub mod add;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a student record")]
    Add(add::AddArgs),
    #[command(about = "List all student records")]
    List,
    #[command(about = "Update a student record", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Delete a student record")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export the register to CSV or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Update(args) => update::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
