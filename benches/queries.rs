use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use song_catalog::queries::{album_summaries, runtime_breakdown, sorted_by_artist_then_title, sorted_titles};
use song_catalog::types::Song;

fn synthetic_catalog(n: usize) -> Vec<Song> {
    (0..n)
        .map(|i| {
            Song::new(
                format!("Track {i:05}"),
                format!("Artist {}", i % 13),
                format!("Album {}", i % 37),
                60 + (i as u32 * 7) % 400,
            )
        })
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let songs = synthetic_catalog(10_000);

    c.bench_function("sorted_titles/10k", |b| {
        b.iter(|| sorted_titles(black_box(&songs)))
    });

    c.bench_function("runtime_breakdown/10k", |b| {
        b.iter(|| runtime_breakdown(black_box(&songs)))
    });

    c.bench_function("album_summaries/10k", |b| {
        b.iter(|| album_summaries(black_box(&songs)))
    });

    c.bench_function("sorted_by_artist_then_title/10k", |b| {
        b.iter(|| sorted_by_artist_then_title(black_box(&songs)))
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
