use std::collections::BTreeMap;

use jiff::Timestamp;

use praxia_core::models::category::{DisciplineType, PracticeSize};
use praxia_core::models::practice::PracticeProfile;
use praxia_core::models::response::ResponseValue;
use praxia_core::models::score::{
    BenchmarkComparison, BusinessHealthScore, ScorePosition,
};
use praxia_storage::memory::MemoryStore;
use praxia_storage::state::{
    latest_health_score, load_assessment, record_health_score, save_assessment, AssessmentRecord,
};

fn record() -> AssessmentRecord {
    let mut responses = BTreeMap::new();
    responses.insert("billing_cycle".to_string(), ResponseValue::Number(4.0));
    responses.insert("booking_online".to_string(), ResponseValue::Bool(true));
    AssessmentRecord {
        responses,
        profile: PracticeProfile {
            practice_name: "Coastline Physio".to_string(),
            discipline: DisciplineType::Physiotherapy,
            practice_size: PracticeSize::Small,
            country: Some("AU".to_string()),
        },
    }
}

fn score(overall: u8) -> BusinessHealthScore {
    BusinessHealthScore {
        overall,
        position: ScorePosition::from_score(overall),
        categories: Vec::new(),
        benchmarks: BenchmarkComparison {
            industry: 65.0,
            similar_size: 64.0,
            top_performers: 86.0,
        },
        geographic_adjustment: None,
    }
}

#[tokio::test]
async fn absent_assessment_reads_as_not_started() {
    let store = MemoryStore::new();
    let loaded = load_assessment(&store, "user-1").await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn assessment_round_trips() {
    let store = MemoryStore::new();
    save_assessment(&store, "user-1", &record()).await.unwrap();

    let loaded = load_assessment(&store, "user-1").await.unwrap().unwrap();
    assert_eq!(loaded.profile.practice_name, "Coastline Physio");
    assert_eq!(
        loaded.responses.get("booking_online"),
        Some(&ResponseValue::Bool(true))
    );
}

#[tokio::test]
async fn latest_score_wins_over_earlier_writes() {
    let store = MemoryStore::new();
    let earlier = Timestamp::UNIX_EPOCH;
    let later = Timestamp::from_second(86_400).unwrap();

    record_health_score(&store, "user-1", earlier, &score(60)).await.unwrap();
    record_health_score(&store, "user-1", later, &score(72)).await.unwrap();

    let latest = latest_health_score(&store, "user-1").await.unwrap().unwrap();
    assert_eq!(latest.overall, 72);
}

#[tokio::test]
async fn scores_are_isolated_per_user() {
    let store = MemoryStore::new();
    record_health_score(&store, "user-1", Timestamp::UNIX_EPOCH, &score(60)).await.unwrap();

    let other = latest_health_score(&store, "user-2").await.unwrap();
    assert!(other.is_none());
}
