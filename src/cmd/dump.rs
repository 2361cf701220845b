use crate::reports;
use clap::Args;
use ngramprob::error::NgResult;
use ngramprob::model::NGramModel;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DumpArgs {
    /// Destination file. The table is printed when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: DumpArgs, model: &NGramModel) -> NgResult<()> {
    let rendered = model.table().to_string();

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            info!("💾 Wrote {}-gram table to {}", model.order(), path.display());
        }
        None => print!("{}", rendered),
    }

    reports::print_bucket_summary(model.table());
    Ok(())
}
