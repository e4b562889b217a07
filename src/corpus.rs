use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// An immutable web-link graph: every page in the corpus, each with the set
/// of in-corpus pages it links to.
///
/// Page names are interned to [`VertexId`]s at construction; everything
/// downstream (transition distributions, rank results) is keyed by vertex
/// and mapped back to names only at the presentation boundary.
#[derive(Debug)]
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    vertices: BTreeMap<String, VertexId>,
    labels: HashMap<VertexId, String, ahash::RandomState>,
}

impl Corpus {
    /// Builds a corpus from `(page, linked pages)` pairs.
    ///
    /// The key set is the universe of pages. Self-links and links to pages
    /// outside the universe are dropped, so a page whose links all fall
    /// outside the corpus ends up dangling.
    pub fn from_links<I>(links: I) -> Self
    where
        I: IntoIterator<Item = (String, BTreeSet<String>)>,
    {
        let links: BTreeMap<String, BTreeSet<String>> = links.into_iter().collect();
        let mut graph = directed::TreeBackedGraph::new();
        let mut vertices = BTreeMap::new();
        let mut labels = HashMap::with_hasher(ahash::RandomState::new());
        for name in links.keys() {
            let v = graph.add_vertex();
            vertices.insert(name.clone(), v);
            labels.insert(v, name.clone());
        }
        for (name, targets) in links.iter() {
            let u = *vertices.get(name).unwrap();
            for target in targets.iter() {
                if target == name {
                    continue;
                }
                let Some(v) = vertices.get(target) else {
                    continue;
                };
                graph.add_edge(u, *v);
            }
        }
        Self {
            graph,
            vertices,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.graph.vertex_size()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.vertex_size() == 0
    }

    /// Iterates all pages in a stable order.
    pub fn pages(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.iter_vertices()
    }

    pub fn contains(&self, page: &VertexId) -> bool {
        self.graph.contains_vertex(page)
    }

    /// Pages linked from `page`.
    pub fn links(&self, page: &VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.out_edges(page).map(|e| e.sink)
    }

    pub fn out_degree(&self, page: &VertexId) -> usize {
        self.graph.out_edges(page).count()
    }

    /// A dangling page has no outbound links within the corpus.
    pub fn is_dangling(&self, page: &VertexId) -> bool {
        self.out_degree(page) == 0
    }

    pub fn page(&self, name: &str) -> Option<VertexId> {
        self.vertices.get(name).copied()
    }

    pub fn label(&self, page: &VertexId) -> Option<&str> {
        self.labels.get(page).map(String::as_str)
    }
}
