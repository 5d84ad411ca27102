use praxia_core::models::category::{DisciplineType, PracticeSize};
use praxia_core::models::score::BenchmarkComparison;

/// Benchmark rows currently exist only for physiotherapy; every other
/// discipline falls back to it. Sizes without a row fall back to `Small`.
pub fn benchmark(discipline: DisciplineType, size: PracticeSize) -> BenchmarkComparison {
    let rows = match discipline {
        DisciplineType::Physiotherapy => PHYSIOTHERAPY,
        // Single-discipline dataset for now.
        _ => PHYSIOTHERAPY,
    };

    rows.iter()
        .find(|(s, _)| *s == size)
        .or_else(|| rows.iter().find(|(s, _)| *s == PracticeSize::Small))
        .map(|(_, b)| *b)
        // Unreachable while the Small row exists; keeps the lookup total.
        .unwrap_or(BenchmarkComparison {
            industry: 65.0,
            similar_size: 65.0,
            top_performers: 85.0,
        })
}

const PHYSIOTHERAPY: &[(PracticeSize, BenchmarkComparison)] = &[
    (
        PracticeSize::Solo,
        BenchmarkComparison {
            industry: 65.0,
            similar_size: 61.0,
            top_performers: 84.0,
        },
    ),
    (
        PracticeSize::Small,
        BenchmarkComparison {
            industry: 65.0,
            similar_size: 64.0,
            top_performers: 86.0,
        },
    ),
    (
        PracticeSize::Medium,
        BenchmarkComparison {
            industry: 65.0,
            similar_size: 68.0,
            top_performers: 88.0,
        },
    ),
    (
        PracticeSize::Large,
        BenchmarkComparison {
            industry: 65.0,
            similar_size: 71.0,
            top_performers: 90.0,
        },
    ),
    (
        PracticeSize::Enterprise,
        BenchmarkComparison {
            industry: 65.0,
            similar_size: 73.0,
            top_performers: 91.0,
        },
    ),
];
