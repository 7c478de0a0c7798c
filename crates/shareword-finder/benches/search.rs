//! Benchmarks for dictionary pattern search.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use shareword_finder::{Dictionary, Pattern, WordMatcher, find_matches};

fn synthetic_dictionary() -> Dictionary {
    let letters: Vec<char> = ('A'..='Z').collect();
    let mut words = Vec::new();
    for &a in &letters {
        for &b in &letters {
            for &c in &letters {
                words.push(format!("{a}{b}{c}"));
                words.push(format!("{a}{b}{c}{a}{b}"));
            }
        }
    }
    words.into_iter().collect()
}

fn bench_search(c: &mut Criterion) {
    let dictionary = synthetic_dictionary();

    c.bench_function("find_matches/exhaustive", |b| {
        let pattern = Pattern::parse("_Q_");
        b.iter(|| find_matches(black_box(&dictionary), black_box(&pattern)).count());
    });

    c.bench_function("find_matches/prefix", |b| {
        let pattern = Pattern::parse("ZZ*");
        b.iter(|| find_matches(black_box(&dictionary), black_box(&pattern)).count());
    });

    c.bench_function("word_matcher/first_three", |b| {
        let mut matcher = WordMatcher::new(dictionary.clone());
        b.iter(|| {
            matcher.set_pattern(black_box("M_M__"));
            matcher.search()
        });
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
