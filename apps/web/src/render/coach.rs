//! Views for the AI Career Coach mode.

use axum::response::Html;

use crate::analysis::models::CoachResult;
use crate::render::{escape, feedback_block, page, Mode, SubmitFeedback};

/// Input state: upload control and submit action.
pub fn input_page(feedback: Option<&SubmitFeedback>) -> Html<String> {
    let body = format!(
        r#"<p>Upload your resume to get suggestions for your future career path.</p>
{feedback}
<form method="post" action="/coach" enctype="multipart/form-data" data-busy-label="AI is analyzing your skills and experience...">
  <h2>Your Resume</h2>
  <input type="file" name="resume" accept=".pdf,.txt,application/pdf,text/plain" required>
  <p><button type="submit">Get Career Advice</button></p>
</form>"#,
        feedback = feedback_block(feedback)
    );
    page(Mode::Coach, &body)
}

/// Results state: profile summary, top skills, one expandable panel per
/// suggested path.
pub fn results_page(result: &CoachResult) -> Html<String> {
    let panels = result
        .suggested_career_paths
        .iter()
        .map(|path| {
            format!(
                r#"<details>
  <summary><strong>Suggestion: {title}</strong></summary>
  <p><strong>Why it's a good fit:</strong> {reason}</p>
  <p class="missing"><strong>Skills to Develop:</strong> {skills}</p>
  <p class="found"><strong>Next Steps:</strong> {next}</p>
</details>"#,
                title = escape(&path.title),
                reason = escape(&path.suitability_reason),
                skills = escape(&path.skills_to_develop.join(", ")),
                next = escape(&path.next_steps),
            )
        })
        .collect::<String>();

    let body = format!(
        r#"<h2>Career Suggestions</h2>
<form method="post" action="/coach/reset"><button type="submit">Start New Career Analysis</button></form>

<p><strong>Profile Summary:</strong> {summary}</p>
<p class="found"><strong>Top Skills:</strong> {skills}</p>
<hr>
{panels}"#,
        summary = escape(&result.candidate_profile.summary),
        skills = escape(&result.candidate_profile.top_skills.join(", ")),
    );
    page(Mode::Coach, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{CandidateProfile, CareerPath};

    fn sample_result() -> CoachResult {
        CoachResult {
            candidate_profile: CandidateProfile {
                summary: "Mid-level backend engineer.".to_string(),
                top_skills: vec!["Go".to_string(), "SQL".to_string()],
            },
            suggested_career_paths: vec![
                CareerPath {
                    title: "Platform Engineer".to_string(),
                    suitability_reason: "Infrastructure background".to_string(),
                    skills_to_develop: vec!["Kubernetes".to_string()],
                    next_steps: "Deploy a side project".to_string(),
                },
                CareerPath {
                    title: "SRE".to_string(),
                    ..Default::default()
                },
                CareerPath {
                    title: "Backend Lead".to_string(),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_results_page_renders_one_panel_per_path() {
        let Html(html) = results_page(&sample_result());
        assert_eq!(html.matches("<details>").count(), 3);
        assert!(html.contains("Suggestion: Platform Engineer"));
        assert!(html.contains("Suggestion: SRE"));
        assert!(html.contains("Suggestion: Backend Lead"));
    }

    #[test]
    fn test_results_page_shows_profile_and_skills() {
        let Html(html) = results_page(&sample_result());
        assert!(html.contains("Mid-level backend engineer."));
        assert!(html.contains("Go, SQL"));
        assert!(html.contains("action=\"/coach/reset\""));
    }

    #[test]
    fn test_input_page_has_upload_control_only() {
        let Html(html) = input_page(None);
        assert!(html.contains("name=\"resume\""));
        assert!(!html.contains("job_description"));
    }
}
