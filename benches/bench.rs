// Criterion benchmarks for Partner Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use partner_match::core::{compute_match_score, Matcher};
use partner_match::models::{AvailabilitySlot, SlotBonuses, TimeSlot, User};

const TAG_POOL: [&str; 8] = [
    "#hiking",
    "#photography",
    "#coffee",
    "#yoga",
    "#reading",
    "#movies",
    "#fitness",
    "#swimming",
];

fn create_user(id: usize) -> User {
    let tags: Vec<String> = (0..=(id % 4))
        .map(|offset| TAG_POOL[(id + offset) % TAG_POOL.len()].to_string())
        .collect();
    let availability = vec![AvailabilitySlot {
        year: 2025,
        month: 1 + (id % 12) as u32,
        day: 1 + (id % 28) as u32,
        time: TimeSlot::ALL[id % TimeSlot::ALL.len()],
    }];
    User {
        id: id.to_string(),
        nick_name: format!("User {}", id),
        bio: String::new(),
        hashtags: tags,
        availability,
    }
}

fn create_current() -> User {
    User {
        id: "current".to_string(),
        nick_name: "Current".to_string(),
        bio: String::new(),
        hashtags: vec!["#hiking".to_string(), "#coffee".to_string()],
        availability: vec![AvailabilitySlot {
            year: 2025,
            month: 3,
            day: 15,
            time: TimeSlot::Morning,
        }],
    }
}

fn bench_compute_match_score(c: &mut Criterion) {
    let current = create_current();
    let candidate = create_user(7);
    let bonuses = SlotBonuses::default();

    c.bench_function("compute_match_score", |b| {
        b.iter(|| compute_match_score(black_box(&candidate), black_box(&current), &bonuses));
    });
}

fn bench_recommendations(c: &mut Criterion) {
    let matcher = Matcher::with_default_bonuses();
    let current = create_current();

    let mut group = c.benchmark_group("recommendations");

    for user_count in [10, 50, 100, 500, 1000].iter() {
        let users: Vec<User> = (0..*user_count).map(create_user).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", user_count),
            user_count,
            |b, _| {
                b.iter(|| {
                    matcher.recommendations(black_box(Some(&current)), black_box(&users))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute_match_score, bench_recommendations);
criterion_main!(benches);
