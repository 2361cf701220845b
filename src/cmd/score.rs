use crate::reports;
use clap::Args;
use ngramprob::error::NgResult;
use ngramprob::model::{NGramModel, SentenceMode};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(required = true)]
    pub phrases: Vec<String>,

    #[arg(short, long, default_value_t = SentenceMode::StartOfSentence)]
    pub mode: SentenceMode,

    /// Print one JSON object per phrase instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, model: &NGramModel) -> NgResult<()> {
    let scores = model.score_batch(&args.phrases, args.mode)?;

    if args.json {
        for score in &scores {
            println!("{}", serde_json::to_string(score)?);
        }
    } else {
        reports::print_score_table(model.order(), &scores);
    }
    Ok(())
}
