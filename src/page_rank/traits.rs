use crate::Corpus;
use algograph::graph::VertexId;
use std::collections::HashMap;

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&mut self) -> Self::Result;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &HashMap<VertexId, f64, ahash::RandomState>;
    fn debug<'a>(&'a self, corpus: &'a Corpus) -> impl std::fmt::Debug + 'a;
}
