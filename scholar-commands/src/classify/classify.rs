use tracing::{info, warn};

use crate::CommandMeta;
use crate::classify::render::render_classification;
use scholar_api::ApiError;
use scholar_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "classify",
    desc: "Classify a document as Business, Health, or Politics.",
    category: "classification",
    usage: "classify <document text>",
};

/// Send a document to the classification service.
///
/// The previous result is cleared as soon as a new document is submitted.
///
/// Error behavior:
/// - blank input is rejected locally and leaves the previous result alone.
/// - service failures are reported with the HTTP status when there is one.
pub async fn run(ctx: Context, arg1: Option<&str>) -> anyhow::Result<String> {
    let Some(document) = arg1.map(str::trim).filter(|document| !document.is_empty()) else {
        return Ok(format!("Error: {}", ApiError::EmptyDocument));
    };

    info!(chars = document.len(), "classifying document");

    let ticket = ctx.classification.begin_replacing().await;
    match ctx.api.classify_document(document).await {
        Ok(response) => {
            let out = render_classification(&response);
            if !ctx.classification.complete(ticket, response).await {
                return Ok("A newer classification replaced this one.".to_owned());
            }
            Ok(out)
        }
        Err(e) => {
            warn!(error = %e, "classification failed");
            ctx.classification.fail(ticket, e.to_string()).await;
            Ok(format!(
                "Error: {e}\nType `reset classify` to clear, or try again."
            ))
        }
    }
}
