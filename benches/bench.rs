// Criterion benchmarks for mentor ranking

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mentor_match::core::{calculate_match_score, rank_mentors};
use mentor_match::models::Mentor;

const SKILLS: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Node.js", "Python", "Django", "Go", "Rust",
    "Java", "Spring Boot", "SQL", "Docker", "Kubernetes", "Machine Learning",
];

fn create_mentor(id: usize) -> Mentor {
    let expertise = (0..4)
        .map(|k| SKILLS[(id * 7 + k * 3) % SKILLS.len()].to_string())
        .collect();
    Mentor::new(id as i64, format!("Mentor {}", id), expertise)
}

fn create_interest() -> Vec<String> {
    ["JavaScript", "React", "Docker", "Rust", "SQL"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn bench_match_score(c: &mut Criterion) {
    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(3), black_box(7)));
    });
}

fn bench_rank_mentors(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_mentors");
    let interest = create_interest();

    for size in [10, 100, 1000, 10000].iter() {
        let mentors: Vec<Mentor> = (0..*size).map(create_mentor).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| rank_mentors(black_box(&interest), black_box(mentors.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_rank_mentors);
criterion_main!(benches);
