use std::collections::BTreeMap;

use praxia_core::models::response::QuestionResponse;

use crate::score::response_points;

/// Derive strengths and weaknesses from per-topic sub-scores.
///
/// The topic of a question is its id prefix before the first underscore
/// (e.g. `billing_cycle_days` → "billing"), so related questions score
/// together. Topics at 75+ read as strengths, 50 and below as weaknesses;
/// the band in between stays quiet. Fully deterministic.
pub fn breakdown(answers: &[QuestionResponse]) -> (Vec<String>, Vec<String>) {
    let mut by_topic: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for answer in answers {
        let topic = answer
            .question_id
            .split_once('_')
            .map_or(answer.question_id.as_str(), |(prefix, _)| prefix);
        let (earned, max) = response_points(&answer.value);
        let entry = by_topic.entry(topic).or_insert((0.0, 0.0));
        entry.0 += earned;
        entry.1 += max;
    }

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for (topic, (earned, max)) in by_topic {
        if max == 0.0 {
            continue;
        }
        let score = (earned / max * 100.0).round() as u8;
        if score >= 75 {
            strengths.push(format!("{} is performing well ({score}/100)", humanize(topic)));
        } else if score <= 50 {
            weaknesses.push(format!("{} needs attention ({score}/100)", humanize(topic)));
        }
    }
    (strengths, weaknesses)
}

fn humanize(topic: &str) -> String {
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
