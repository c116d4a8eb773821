//! Export the register to a CSV or Excel file.

use crate::db::students::Students;
use crate::libs::export::{ExportOutcome, Exporter};
use crate::libs::messages::Message;
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file; a `.csv` extension selects CSV, anything else Excel
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let exporter = Exporter::new(export_args.output);

    match Students::new().and_then(|mut store| exporter.export(&mut store)) {
        Ok(ExportOutcome::Written(count)) => {
            msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string(), count))
        }
        Ok(ExportOutcome::Empty) => msg_warning!(Message::NothingToExport),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
