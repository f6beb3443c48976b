//! Views for the Resume Analyzer mode.

use axum::response::Html;

use crate::analysis::models::AnalysisResult;
use crate::render::{escape, feedback_block, list_items, page, Mode, SubmitFeedback};

/// Input state: upload control, job description box, submit action.
pub fn input_page(feedback: Option<&SubmitFeedback>) -> Html<String> {
    let body = format!(
        r#"<p>Upload a resume and a job description for a detailed comparative analysis.</p>
{feedback}
<form method="post" action="/analyzer" enctype="multipart/form-data" data-busy-label="Performing comparative analysis...">
  <h2>Your Resume</h2>
  <input type="file" name="resume" accept=".pdf,.txt,application/pdf,text/plain" required>
  <h2>Job Description</h2>
  <textarea name="job_description" required></textarea>
  <p><button type="submit">Analyze Resume &amp; Job Ad</button></p>
</form>"#,
        feedback = feedback_block(feedback)
    );
    page(Mode::Analyzer, &body)
}

/// Results state: fixed sections built from the stored result, plus the
/// "start new" action that clears the slot.
pub fn results_page(result: &AnalysisResult) -> Html<String> {
    let score = result.match_score;
    let recommendations = result
        .actionable_recommendations
        .iter()
        .map(|rec| {
            format!(
                "<li><strong>{}:</strong> {}</li>",
                escape(&rec.area),
                escape(&rec.suggestion)
            )
        })
        .collect::<String>();

    let body = format!(
        r#"<h2>Analysis Results</h2>
<form method="post" action="/analyzer/reset"><button type="submit">Start New Analysis</button></form>

<section>
  <h3>Summary</h3>
  <p class="score">{score}%</p>
  <progress value="{score}" max="100"></progress>
  <p>{summary}</p>
</section>

<section>
  <h3>Keywords</h3>
  <p class="found"><strong>Found:</strong> {found}</p>
  <p class="missing"><strong>Missing:</strong> {missing}</p>
</section>

<section>
  <h3>Recommendations</h3>
  <h4>Strengths</h4>
  <ul>{strengths}</ul>
  <h4>Areas for Improvement</h4>
  <ul>{areas}</ul>
  <h4>Actionable Recommendations</h4>
  <ul>{recommendations}</ul>
</section>

<section>
  <h3>Interview Prep</h3>
  <h4>Technical Questions</h4>
  <ol>{technical}</ol>
  <h4>Behavioral Questions</h4>
  <ol>{behavioral}</ol>
</section>"#,
        summary = escape(&result.analysis_summary),
        found = escape(&result.keywords.resume_keywords.join(", ")),
        missing = escape(&result.keywords.missing_keywords.join(", ")),
        strengths = list_items(&result.strengths),
        areas = list_items(&result.areas_for_improvement),
        technical = list_items(&result.interview_prep.technical_questions),
        behavioral = list_items(&result.interview_prep.behavioral_questions),
    );
    page(Mode::Analyzer, &body)
}
