use algograph::graph::VertexId;
use anyhow::Result;
use clap::Parser;
use corpus_rank::{
    crawl,
    page_rank::{iterated, sampled, PageRank, PageRankResult},
    Corpus,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::{collections::HashMap, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Rank the pages of an HTML corpus with PageRank")]
struct Args {
    /// Directory of HTML pages forming the corpus.
    corpus: PathBuf,
    /// Probability of following an outbound link instead of teleporting.
    #[arg(long, default_value_t = 0.85)]
    damping: f64,
    /// Number of random-surfer steps for the sampling estimator.
    #[arg(long, default_value_t = 10_000)]
    samples: usize,
    /// Seed for the sampling estimator, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let corpus = crawl(&args.corpus)?;

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let config = sampled::Config {
        damping: args.damping,
        samples: args.samples,
    };
    let mut sampler = sampled::SampledPageRank::new(&corpus, &config, rng)?;
    let result = sampler.calc();
    println!("PageRank results from sampling (n = {})", args.samples);
    print_ranks(&corpus, result.page_rank());

    let config = iterated::Config {
        damping: args.damping,
    };
    let mut power = iterated::IteratedPageRank::new(&corpus, &config)?;
    let result = power.calc();
    tracing::debug!(
        "converged after {} sweeps\n{:?}",
        result.sweeps,
        result.debug(&corpus)
    );
    println!("PageRank results from iteration");
    print_ranks(&corpus, result.page_rank());

    Ok(())
}

fn print_ranks(corpus: &Corpus, ranks: &HashMap<VertexId, f64, ahash::RandomState>) {
    let mut lines: Vec<_> = ranks
        .iter()
        .map(|(page, rank)| (corpus.label(page).unwrap_or("?"), *rank))
        .collect();
    lines.sort_by(|a, b| a.0.cmp(b.0));
    for (name, rank) in lines {
        println!("  {name}: {rank:.4}");
    }
}
