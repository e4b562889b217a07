use super::*;
use crate::*;
use algograph::graph::VertexId;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Largest per-page movement allowed in the final sweep.
const EPSILON: f64 = 1e-3;

pub struct IteratedPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    danglings: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { damping: 0.85 }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    pub delta: HashMap<VertexId, f64, ahash::RandomState>,
    pub sweeps: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        if !(0.0..=1.0).contains(&damping) {
            return Err(Error::DampingOutOfRange(damping));
        }
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let transitions = {
            let mut transitions = BTreeMap::new();
            for u in corpus.pages() {
                let l = corpus.out_degree(&u);
                if l == 0 {
                    continue;
                }
                let unit = damping / (l as f64);
                for v in corpus.links(&u) {
                    transitions.insert((u, v), unit);
                }
            }
            transitions
        };
        let danglings = corpus.pages().filter(|u| corpus.is_dangling(u)).collect();
        Ok(Self {
            corpus,
            damping,
            transitions,
            danglings,
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&mut self) -> Self::Result {
        let n = self.corpus.len() as f64;
        let teleport = (1.0 - self.damping) / n;
        let mut p: HashMap<VertexId, f64, ahash::RandomState> =
            self.corpus.pages().map(|v| (v, 1.0 / n)).collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut delta = HashMap::with_hasher(ahash::RandomState::new());
        let mut sweeps = 0;
        loop {
            sweeps += 1;
            // A dangling page behaves as if it linked to every page, so its
            // whole rank is spread uniformly instead of being lost.
            let dangling_mass: f64 = self.danglings.iter().map(|v| *p.get(v).unwrap()).sum();
            let base = teleport + self.damping * dangling_mass / n;
            for v in self.corpus.pages() {
                r.insert(v, base);
            }
            for ((u, v), w) in self.transitions.iter() {
                let from = p.get(u).unwrap();
                let to = r.get_mut(v).unwrap();
                *to += from * w;
            }

            delta.clear();
            for v in self.corpus.pages() {
                let a = p.get(&v).unwrap();
                let b = r.get(&v).unwrap();
                delta.insert(v, a - b);
            }

            let moved = norm_inf(&delta);
            debug!(sweep = sweeps, max_delta = moved, "power iteration sweep");
            if moved <= EPSILON {
                return Self::Result {
                    page_rank: r,
                    delta,
                    sweeps,
                };
            }

            std::mem::swap(&mut p, &mut r);
            r.clear();
        }
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
            let d = self.result.delta.get(&v).unwrap();
            writeln!(f, "{name}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
