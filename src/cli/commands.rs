//! Command execution logic for the Remez CLI.

use crate::catalog::SectionCatalog;
use crate::cli::args::{
    Command, EncodeArgs, RemezArgs, SearchArgs, SectionsArgs, TrendArgs,
};
use crate::cli::output::{
    self, EncodeOutput, SearchOutput, SectionRow, TrendOutput,
};
use crate::corpus::{RawCorpus, loader};
use crate::error::{RemezError, Result};
use crate::gematria::encode;
use crate::index::ValueIndex;
use crate::search::{MatchEngine, SearchRequest};
use crate::trends::{BookBreakdown, TrendScanner, occurrences_to_csv};

/// Execute the parsed command.
pub fn execute_command(args: RemezArgs) -> Result<()> {
    match args.command.clone() {
        Command::Encode(cmd) => execute_encode(&args, cmd),
        Command::Search(cmd) => execute_search(&args, cmd),
        Command::Trend(cmd) => execute_trend(&args, cmd),
        Command::Sections(cmd) => execute_sections(&args, cmd),
    }
}

fn execute_encode(args: &RemezArgs, cmd: EncodeArgs) -> Result<()> {
    let result = EncodeOutput {
        value: encode(&cmd.text),
        input: cmd.text,
    };
    output::emit(args, &result, |r| println!("{}", r.value))
}

fn execute_search(args: &RemezArgs, cmd: SearchArgs) -> Result<()> {
    let raw = loader::load_raw_corpus(&cmd.corpus)?;
    let index = ValueIndex::build(&raw);
    let catalog = SectionCatalog::torah();

    let mut request = match &cmd.target {
        Some(target) => SearchRequest::bridge(encode(&cmd.query), encode(target)),
        None => SearchRequest::standard(encode(&cmd.query))
            .tolerance(cmd.colel),
    };
    request = request.single_word_only(cmd.single_word);
    if let Some(section) = &cmd.section {
        if catalog.by_name(section).is_none() {
            return Err(RemezError::catalog(format!("unknown section: {section}")));
        }
        request = request.in_section(section.clone());
    }

    let results = MatchEngine::new().search(&request, &index, &catalog);
    let result = SearchOutput {
        targets: request.target_values(),
        total: results.len(),
        results: results.into_iter().take(cmd.limit).collect(),
    };

    output::emit(args, &result, |r| {
        if args.verbosity() >= 2 {
            println!("Targets: {:?}", r.targets);
        }
        if r.results.is_empty() {
            println!("No matches found.");
            return;
        }
        for m in &r.results {
            println!("{}", output::format_match(m));
        }
        if r.total > r.results.len() {
            println!("... and {} more", r.total - r.results.len());
        }
    })
}

fn execute_trend(args: &RemezArgs, cmd: TrendArgs) -> Result<()> {
    let raw = loader::load_raw_corpus(&cmd.corpus)?;
    let RawCorpus::Verses(verses) = raw else {
        return Err(RemezError::corpus(
            "trend scanning needs a verse-array corpus, not a bucketed database",
        ));
    };

    let scanner = TrendScanner::with_stride(cmd.stride);
    let report = scanner.scan(&verses, &cmd.words, cmd.prefixes);

    if cmd.csv {
        print!("{}", occurrences_to_csv(&report));
        return Ok(());
    }

    let breakdown = BookBreakdown::from_report(&report);
    let result = TrendOutput {
        words: report.words.clone(),
        sample_points: report.series.len(),
        matching_verses: report.occurrences.len(),
        totals_by_book: breakdown.totals.clone(),
        total: breakdown.total,
    };

    output::emit(args, &result, |r| {
        println!("Words: {}", r.words.join(", "));
        println!("Matching verses: {}", r.matching_verses);
        for (book, count) in &r.totals_by_book {
            println!("  {book:<12} {count:>6}");
        }
        println!("  {:<12} {:>6}", "Total", r.total);
    })
}

fn execute_sections(args: &RemezArgs, cmd: SectionsArgs) -> Result<()> {
    let catalog = SectionCatalog::torah();
    let rows: Vec<SectionRow> = catalog
        .sections()
        .iter()
        .filter(|s| cmd.verse_count.is_none_or(|v| s.verse_count == v))
        .map(|s| SectionRow {
            name: s.name.clone(),
            book: s.book.clone(),
            start: s.start,
            end: s.end,
            verse_count: s.verse_count,
        })
        .collect();

    output::emit(args, &rows, |rows| {
        for row in rows {
            println!(
                "{:<18} {:<12} {}:{}-{}:{}  ({} verses)",
                row.name, row.book, row.start.0, row.start.1, row.end.0, row.end.1, row.verse_count
            );
        }
    })
}
