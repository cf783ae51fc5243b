use scholar_api::{Publication, SearchMetadata};
use scholar_core::SearchOutcome;
use scholar_store::SlotState;
use scholar_utils::pagination::{build_paginated_view, compute_window};

/// Human label for a relevance score.
pub fn relevance_tier(score: f64) -> &'static str {
    if score >= 8.0 {
        "high"
    } else if score >= 6.0 {
        "medium"
    } else {
        "low"
    }
}

/// Clean up an authors string for display.
///
/// Some records repeat the title inside the authors field; it is removed.
pub fn format_authors(authors: &str, title: &str) -> String {
    let mut cleaned = authors.to_owned();
    if !title.is_empty() && cleaned.contains(title) {
        cleaned = cleaned.replacen(title, "", 1);
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "Unknown Authors".to_owned()
    } else {
        cleaned.to_owned()
    }
}

/// Format an integer with comma thousands separators.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn results_header(metadata: &SearchMetadata) -> String {
    format!(
        "About {} results ({}ms)",
        thousands(metadata.total_results),
        metadata.search_time_ms
    )
}

/// Render one publication as a result card. `position` is 1-based across all pages.
pub fn render_card(position: usize, publication: &Publication) -> String {
    let mut card = format!(
        "{position}. {}\n   {}\n   {} · {}\n   relevance {:.1} ({})",
        publication.title,
        publication.publication_link,
        format_authors(&publication.authors, &publication.title),
        publication.year,
        publication.relevance_score,
        relevance_tier(publication.relevance_score),
    );
    if publication.page_number > 0 {
        card.push_str(&format!(" · Page {}", publication.page_number));
    }
    card
}

/// Render a page of search results with its navigation bar.
pub fn render_results(outcome: &SearchOutcome) -> anyhow::Result<String> {
    let response = &outcome.response;
    let window = compute_window(response.total, response.limit, outcome.offset)?;

    let body = if response.publications.is_empty() {
        "No publications found for your search.\nTry different keywords or check your spelling."
            .to_owned()
    } else {
        let cards = response
            .publications
            .iter()
            .enumerate()
            .map(|(i, publication)| render_card(outcome.offset.saturating_add(i + 1), publication))
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}\n\n{cards}", results_header(&response.search_metadata))
    };

    let title = format!("Results for \"{}\"", outcome.query);
    let view = build_paginated_view(&title, body, &window, response.total);

    Ok(view.render())
}

/// Render the whole search state: last error, then the last applied results.
pub fn render_search_state(state: &SlotState<SearchOutcome>) -> anyhow::Result<String> {
    let mut sections = Vec::new();

    if let Some(error) = state.error.as_deref() {
        sections.push(format!(
            "Error: {error}\nType `reset search` to start over."
        ));
    }

    if let Some(outcome) = state.value.as_ref() {
        sections.push(render_results(outcome)?);
    }

    if sections.is_empty() {
        sections.push("No search yet. Type `search <query>` to begin.".to_owned());
    }

    Ok(sections.join("\n\n"))
}
