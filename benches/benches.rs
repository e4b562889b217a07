use corpus_rank::page_rank::{iterated, sampled, PageRank};
use corpus_rank::Corpus;
use criterion::*;
use rand::{prelude::*, rngs::SmallRng};
use std::collections::{BTreeMap, BTreeSet};

criterion_main!(benches);
criterion_group!(benches, random_iterated, random_sampled, chain_iterated);

fn random_iterated(c: &mut Criterion) {
    let mut group = c.benchmark_group("RandomIterated");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    let mut rng = SmallRng::seed_from_u64(3407);
    for n in SIZES.iter() {
        let corpus = gen_random_corpus(&mut rng, *n, 4);
        group.bench_with_input(BenchmarkId::new("IteratedPR", n), n, |b, _| {
            b.iter(|| {
                let mut pr =
                    iterated::IteratedPageRank::new(&corpus, &iterated::Config::default())
                        .unwrap();
                black_box(pr.calc());
            })
        });
    }
    group.finish();
}

fn random_sampled(c: &mut Criterion) {
    let mut group = c.benchmark_group("RandomSampled");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    let mut rng = SmallRng::seed_from_u64(3407);
    for n in SIZES.iter() {
        let corpus = gen_random_corpus(&mut rng, *n, 4);
        group.bench_with_input(BenchmarkId::new("SampledPR", n), n, |b, _| {
            b.iter(|| {
                let walk_rng = SmallRng::seed_from_u64(42);
                let mut pr =
                    sampled::SampledPageRank::new(&corpus, &sampled::Config::default(), walk_rng)
                        .unwrap();
                black_box(pr.calc());
            })
        });
    }
    group.finish();
}

fn chain_iterated(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chain");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize, 320usize];
    for n in SIZES.iter() {
        // p0 -> p1 -> ... -> p(n-1), last page dangling
        let links: BTreeMap<String, BTreeSet<String>> = (0..*n)
            .map(|i| {
                let mut targets = BTreeSet::new();
                if i + 1 < *n {
                    targets.insert(format!("p{}.html", i + 1));
                }
                (format!("p{i}.html"), targets)
            })
            .collect();
        let corpus = Corpus::from_links(links);
        group.bench_with_input(BenchmarkId::new("IteratedPR", n), n, |b, _| {
            b.iter(|| {
                let mut pr =
                    iterated::IteratedPageRank::new(&corpus, &iterated::Config::default())
                        .unwrap();
                black_box(pr.calc());
            })
        });
    }
    group.finish();
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn gen_random_corpus<R: Rng>(rng: &mut R, n: usize, links_per_page: usize) -> Corpus {
    let names: Vec<String> = (0..n).map(|i| format!("p{i}.html")).collect();
    let mut links: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for name in names.iter() {
        let mut targets = BTreeSet::new();
        for _ in 0..links_per_page {
            targets.insert(names.choose(rng).unwrap().clone());
        }
        links.insert(name.clone(), targets);
    }
    Corpus::from_links(links)
}
