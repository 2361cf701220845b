use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ngramprob::model::{NGramTable, PhraseScore, SentenceMode};

pub struct GridColumn {
    pub order: usize,
    pub mode: SentenceMode,
    pub scores: Vec<PhraseScore>,
}

fn probability_cell(p: f64) -> Cell {
    let cell = Cell::new(format!("{:.6}", p)).set_alignment(CellAlignment::Right);
    if p == 0.0 {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::Green)
    }
}

pub fn print_score_table(model_order: usize, scores: &[PhraseScore]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Phrase").add_attribute(Attribute::Bold),
        Cell::new("Mode"),
        Cell::new("N"),
        Cell::new("Probability").fg(Color::Cyan),
    ]);

    for s in scores {
        table.add_row(vec![
            Cell::new(&s.phrase).add_attribute(Attribute::Bold),
            Cell::new(s.mode.to_string()),
            Cell::new(s.order).set_alignment(CellAlignment::Right),
            probability_cell(s.probability),
        ]);
    }

    println!("\nModel order: {}", model_order);
    println!("{}", table);
}

pub fn print_grid(phrases: &[String], columns: &[GridColumn]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("#"),
        Cell::new("Phrase").add_attribute(Attribute::Bold),
    ];
    for col in columns {
        header.push(Cell::new(format!("N={} {}", col.order, col.mode)).fg(Color::Cyan));
    }
    table.set_header(header);

    for (i, phrase) in phrases.iter().enumerate() {
        let mut row = vec![Cell::new(i + 1), Cell::new(phrase)];
        for col in columns {
            match col.scores.get(i) {
                Some(s) => row.push(probability_cell(s.probability)),
                None => row.push(Cell::new("-")),
            }
        }
        table.add_row(row);
    }

    println!("\n{}", table);
}

pub fn print_bucket_summary(ngrams: &NGramTable) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Order").add_attribute(Attribute::Bold),
        Cell::new("Distinct"),
        Cell::new("Occurrences"),
    ]);

    for (i, bucket) in ngrams.buckets().iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{}-GRAM", i + 1)),
            Cell::new(bucket.len()).set_alignment(CellAlignment::Right),
            Cell::new(bucket.total_count()).set_alignment(CellAlignment::Right),
        ]);
    }

    eprintln!("\nTerm count: {}", ngrams.term_count());
    eprintln!("{}", table);
}
