/// Width of the horizontal rule drawn under panel titles.
pub const PANEL_RULE_WIDTH: usize = 60;

/// A titled block of console output with an optional footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub body: String,
    pub footer: Option<String>,
}

impl Panel {
    /// Render the panel as plain text.
    pub fn render(&self) -> String {
        let rule = "─".repeat(PANEL_RULE_WIDTH);
        let mut out = format!("{}\n{rule}\n{}", self.title, self.body.trim_end());
        if let Some(footer) = self.footer.as_deref().filter(|footer| !footer.is_empty()) {
            out.push_str(&format!("\n{rule}\n{footer}"));
        }
        out
    }
}

/// Build a standard paginated panel with consistent styling.
pub fn build_paginated_panel(
    title: &str,
    body: impl Into<String>,
    page: usize,
    total_pages: usize,
) -> Panel {
    build_paginated_panel_with_footer_note(title, body, page, total_pages, None)
}

/// Build a standard paginated panel with an optional footer suffix.
pub fn build_paginated_panel_with_footer_note(
    title: &str,
    body: impl Into<String>,
    page: usize,
    total_pages: usize,
    footer_note: Option<&str>,
) -> Panel {
    let page = page.max(1);

    let footer_text = if total_pages > 1 {
        match footer_note {
            Some(note) if !note.is_empty() => format!("Page {page}/{total_pages} • {note}"),
            _ => format!("Page {page}/{total_pages}"),
        }
    } else {
        match footer_note {
            Some(note) if !note.is_empty() => note.to_owned(),
            _ => String::new(),
        }
    };

    Panel {
        title: title.to_owned(),
        body: body.into(),
        footer: (!footer_text.is_empty()).then_some(footer_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_shows_page_position_for_multi_page_panels() {
        let panel = build_paginated_panel_with_footer_note("Results", "body", 3, 5, Some("42ms"));
        assert_eq!(panel.footer.as_deref(), Some("Page 3/5 • 42ms"));
    }

    #[test]
    fn single_page_panel_only_keeps_the_note() {
        let panel = build_paginated_panel("Results", "body", 1, 1);
        assert_eq!(panel.footer, None);
        assert!(!panel.render().contains("Page"));

        let noted = build_paginated_panel_with_footer_note("Results", "body", 1, 0, Some("note"));
        assert_eq!(noted.footer.as_deref(), Some("note"));
    }

    #[test]
    fn render_places_title_body_and_footer_in_order() {
        let text = build_paginated_panel("Title", "line one\n", 2, 4).render();
        let title_at = text.find("Title").expect("title");
        let body_at = text.find("line one").expect("body");
        let footer_at = text.find("Page 2/4").expect("footer");
        assert!(title_at < body_at && body_at < footer_at);
    }
}
