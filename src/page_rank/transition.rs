use crate::{Corpus, Error, Result};
use algograph::graph::VertexId;
use std::collections::HashMap;

/// The probability distribution over "the next page visited" for a random
/// surfer sitting on `page`.
///
/// With probability `damping` the surfer follows one of `page`'s outbound
/// links, each equally likely; otherwise it jumps to a uniformly random
/// corpus page. A dangling page behaves as if it linked to every page, so
/// the result is the uniform distribution rather than a rank sink.
pub fn transition(
    corpus: &Corpus,
    page: VertexId,
    damping: f64,
) -> Result<HashMap<VertexId, f64, ahash::RandomState>> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(Error::DampingOutOfRange(damping));
    }
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    if !corpus.contains(&page) {
        return Err(Error::UnknownPage(page));
    }

    let n = corpus.len() as f64;
    let mut distribution = HashMap::with_hasher(ahash::RandomState::new());
    if corpus.is_dangling(&page) {
        for p in corpus.pages() {
            distribution.insert(p, 1.0 / n);
        }
        return Ok(distribution);
    }

    let l = corpus.out_degree(&page) as f64;
    for p in corpus.pages() {
        distribution.insert(p, (1.0 - damping) / n);
    }
    for p in corpus.links(&page) {
        *distribution.get_mut(&p).unwrap() += damping / l;
    }
    Ok(distribution)
}
