use scholar_api::{Category, ClassificationResponse};
use scholar_utils::panel::Panel;

/// Width of the confidence bars, in characters.
const BAR_WIDTH: usize = 20;

/// Format a `[0, 1]` confidence as a percentage with one decimal.
pub fn format_confidence(score: f64) -> String {
    format!("{:.1}", score * 100.0)
}

/// Proportional bar for a `[0, 1]` confidence.
pub fn confidence_bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn render_classification(response: &ClassificationResponse) -> String {
    let scores = Category::ALL
        .iter()
        .map(|&category| {
            let score = response.confidence_scores.get(category);
            let marker = if category == response.predicted_category {
                "*"
            } else {
                " "
            };
            format!(
                "{marker} {:<9} {:>5}% {}",
                category.as_str(),
                format_confidence(score),
                confidence_bar(score)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Panel {
        title: "Classification Result".to_owned(),
        body: format!(
            "Predicted category: {}\n\nConfidence scores:\n{scores}\n\nPreprocessed text:\n{}",
            response.predicted_category, response.preprocessed_text
        ),
        footer: Some(format!("status: {}", response.status)),
    }
    .render()
}
