use crate::reports::{self, GridColumn};
use clap::Args;
use ngramprob::error::{NGramError, NgResult};
use ngramprob::model::{NGramModel, SentenceMode};
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    #[arg(required = true)]
    pub phrases: Vec<String>,

    #[arg(long, default_value_t = 2)]
    pub min_order: usize,

    #[arg(long, default_value_t = 3)]
    pub max_order: usize,
}

pub fn run(args: GridArgs, model: &mut NGramModel) -> NgResult<()> {
    if args.min_order < 1 {
        return Err(NGramError::InvalidOrder(args.min_order));
    }
    if args.max_order < args.min_order {
        return Err(NGramError::Config(format!(
            "--max-order {} is below --min-order {}",
            args.max_order, args.min_order
        )));
    }

    let mut columns = Vec::new();
    for order in args.min_order..=args.max_order {
        info!("🔁 Rebuilding table at order {}", order);
        model.rebuild(order)?;

        for mode in SentenceMode::iter() {
            columns.push(GridColumn {
                order,
                mode,
                scores: model.score_batch(&args.phrases, mode)?,
            });
        }
    }

    reports::print_grid(&args.phrases, &columns);
    Ok(())
}
