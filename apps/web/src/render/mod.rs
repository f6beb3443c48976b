//! Server-rendered views.
//!
//! Each mode is a two-state machine: its Input form renders while the
//! session slot is empty, its Results view once the slot is filled. The
//! top-level mode switch is plain navigation and never touches the other
//! mode's slot. All model-supplied text is HTML-escaped before rendering.

pub mod analyzer;
pub mod coach;

use axum::response::Html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Analyzer,
    Coach,
}

impl Mode {
    pub fn path(self) -> &'static str {
        match self {
            Mode::Analyzer => "/analyzer",
            Mode::Coach => "/coach",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Analyzer => "Resume Analyzer",
            Mode::Coach => "AI Career Coach",
        }
    }
}

/// Inline feedback shown on the Input form after a failed submit.
#[derive(Debug)]
pub enum SubmitFeedback {
    /// Extraction or API failure: a message, nothing else to show.
    Error(String),
    /// Parse failure: a message plus the verbatim model response for
    /// manual inspection.
    RawResponse { message: String, raw: String },
}

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #1c1c1c; }
    nav a { margin-right: 1rem; text-decoration: none; color: #2563eb; }
    nav a[aria-current] { font-weight: bold; color: #1c1c1c; }
    .error { color: #b91c1c; background: #fef2f2; padding: 0.6rem; border-radius: 4px; }
    .score { font-size: 2.2rem; margin: 0.2rem 0; }
    .found { color: #166534; } .missing { color: #92400e; }
    textarea, input[type=file] { width: 100%; }
    textarea { min-height: 10rem; }
    button { padding: 0.5rem 1.2rem; cursor: pointer; }
    details { border: 1px solid #ddd; border-radius: 4px; padding: 0.5rem; margin: 0.5rem 0; }
    progress { width: 100%; }
"#;

/// Disables the submit button and swaps its label while the single
/// in-flight generation request blocks the interaction.
const BUSY_SCRIPT: &str = r#"
    document.querySelectorAll("form[data-busy-label]").forEach(function (form) {
        form.addEventListener("submit", function () {
            var button = form.querySelector("button[type=submit]");
            if (button) { button.disabled = true; button.textContent = form.dataset.busyLabel; }
        });
    });
"#;

/// Wraps a body fragment in the page shell with the mode navigation.
pub fn page(active: Mode, body: &str) -> Html<String> {
    let nav = [Mode::Analyzer, Mode::Coach]
        .iter()
        .map(|mode| {
            let current = if *mode == active {
                " aria-current=\"page\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\"{current}>{}</a>",
                mode.path(),
                mode.label()
            )
        })
        .collect::<String>();

    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>AI Resume &amp; Career Platform</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>AI Resume &amp; Career Platform</h1>\n<nav>{nav}</nav>\n<hr>\n{body}\n\
         <script>{BUSY_SCRIPT}</script>\n</body>\n</html>"
    ))
}

/// Static page shown on every route while the API credential is missing.
pub fn config_error_page() -> Html<String> {
    error_page(
        "API key (GEMINI_API_KEY) not found. Set it in the environment or \
         your .env file and restart the server.",
    )
}

/// Minimal standalone error page, also used by `AppError::into_response`.
pub fn error_page(message: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>AI Resume &amp; Career Platform</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>AI Resume &amp; Career Platform</h1>\n<p class=\"error\">{}</p>\n</body>\n</html>",
        escape(message)
    ))
}

pub(crate) fn feedback_block(feedback: Option<&SubmitFeedback>) -> String {
    match feedback {
        None => String::new(),
        Some(SubmitFeedback::Error(message)) => {
            format!("<p class=\"error\">{}</p>", escape(message))
        }
        Some(SubmitFeedback::RawResponse { message, raw }) => format!(
            "<p class=\"error\">{}</p>\n<label>Raw AI Response:\
             <textarea readonly rows=\"12\">{}</textarea></label>",
            escape(message),
            escape(raw)
        ),
    }
}

pub(crate) fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

/// Escapes text for interpolation into HTML element content or
/// double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_passes_plain_text_through() {
        assert_eq!(escape("Skilled Go developer"), "Skilled Go developer");
    }

    #[test]
    fn test_page_marks_the_active_mode() {
        let Html(html) = page(Mode::Coach, "");
        assert!(html.contains("<a href=\"/coach\" aria-current=\"page\">AI Career Coach</a>"));
        assert!(html.contains("<a href=\"/analyzer\">Resume Analyzer</a>"));
    }

    #[test]
    fn test_raw_response_feedback_renders_readonly_textarea() {
        let feedback = SubmitFeedback::RawResponse {
            message: "Error parsing the AI response.".to_string(),
            raw: "Sorry, I cannot comply.".to_string(),
        };
        let block = feedback_block(Some(&feedback));
        assert!(block.contains("<textarea readonly"));
        assert!(block.contains("Sorry, I cannot comply."));
    }

    #[test]
    fn test_config_error_page_names_the_missing_variable() {
        let Html(html) = config_error_page();
        assert!(html.contains("GEMINI_API_KEY"));
    }
}
