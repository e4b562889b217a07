use super::*;
use crate::*;
use algograph::graph::VertexId;
use rand::{distr::weighted::WeightedIndex, prelude::*};
use std::collections::HashMap;
use tracing::debug;

pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    corpus: &'a Corpus,
    samples: usize,
    rng: R,
    pages: Vec<VertexId>,
    steps: HashMap<VertexId, Step, ahash::RandomState>,
}

struct Step {
    targets: Vec<VertexId>,
    weights: WeightedIndex<f64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    pub visits: HashMap<VertexId, u64, ahash::RandomState>,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(corpus: &'a Corpus, config: &Config, rng: R) -> crate::Result<Self> {
        if !(0.0..=1.0).contains(&config.damping) {
            return Err(Error::DampingOutOfRange(config.damping));
        }
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        if config.samples < 1 {
            return Err(Error::NoSamples);
        }
        let pages: Vec<_> = corpus.pages().collect();
        let steps = {
            let mut steps = HashMap::with_hasher(ahash::RandomState::new());
            for u in pages.iter() {
                let distribution = transition(corpus, *u, config.damping)?;
                // flattened in stable page order, so a seeded rng replays
                // the same walk
                let mut targets = Vec::with_capacity(pages.len());
                let mut probs = Vec::with_capacity(pages.len());
                for v in pages.iter() {
                    targets.push(*v);
                    probs.push(*distribution.get(v).unwrap());
                }
                let weights = WeightedIndex::new(&probs).expect("transition weights sum to 1");
                steps.insert(*u, Step { targets, weights });
            }
            steps
        };
        Ok(Self {
            corpus,
            samples: config.samples,
            rng,
            pages,
            steps,
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    fn calc(&mut self) -> Self::Result {
        let mut visits: HashMap<VertexId, u64, ahash::RandomState> =
            self.corpus.pages().map(|v| (v, 0)).collect();
        let mut current = *self.pages.choose(&mut self.rng).unwrap();
        *visits.get_mut(&current).unwrap() += 1;
        for _ in 1..self.samples {
            let step = self.steps.get(&current).unwrap();
            current = step.targets[step.weights.sample(&mut self.rng)];
            *visits.get_mut(&current).unwrap() += 1;
        }
        debug!(samples = self.samples, "random surfer walk finished");
        let page_rank = visits
            .iter()
            .map(|(v, count)| (*v, *count as f64 / self.samples as f64))
            .collect();
        Self::Result { page_rank, visits }
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &HashMap<VertexId, f64, ahash::RandomState> {
        &self.page_rank
    }

    fn debug<'a>(&'a self, corpus: &'a Corpus) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            corpus,
            result: self,
        }
    }
}

pub struct ResultDebug<'a> {
    corpus: &'a Corpus,
    result: &'a self::Result,
}

impl std::fmt::Debug for ResultDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.corpus.pages() {
            let name = self.corpus.label(&v).unwrap_or("?");
            let p = self.result.page_rank.get(&v).unwrap();
            let visits = self.result.visits.get(&v).unwrap();
            writeln!(f, "{name}: {p:?}, {visits} visits")?;
        }
        Ok(())
    }
}
