use crate::Corpus;
use std::collections::{BTreeMap, BTreeSet};

pub fn corpus(pages: &[(&str, &[&str])]) -> Corpus {
    Corpus::from_links(pages.iter().map(|(name, links)| {
        (
            name.to_string(),
            links.iter().map(|l| l.to_string()).collect::<BTreeSet<_>>(),
        )
    }))
}

#[derive(Debug, Clone)]
pub struct RandomCorpus {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl RandomCorpus {
    pub fn build(&self) -> Corpus {
        Corpus::from_links(self.links.clone())
    }
}

impl quickcheck::Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 8;

        let n = usize::arbitrary(g) % N + 1;
        let names: Vec<String> = (0..n).map(|i| format!("p{i}.html")).collect();
        let mut links = BTreeMap::new();
        for name in names.iter() {
            let mut targets = BTreeSet::new();
            for target in names.iter() {
                if target != name && bool::arbitrary(g) {
                    targets.insert(target.clone());
                }
            }
            links.insert(name.clone(), targets);
        }
        Self { links }
    }
}
