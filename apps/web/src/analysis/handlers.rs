//! Axum route handlers for both modes.
//!
//! A submit runs extract → prompt → generate → parse. Success stores the
//! result in the session slot and redirects back to the mode's GET view
//! (POST-redirect-GET). Every pipeline failure re-renders the Input form
//! with inline feedback and leaves the slot untouched.

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::analysis::models::{AnalysisResult, CoachResult};
use crate::analysis::parser::parse_model_response;
use crate::analysis::prompts;
use crate::errors::AppError;
use crate::extract::{extract_text, UploadedFile};
use crate::llm_client::TextGenerator;
use crate::render::{self, Mode, SubmitFeedback};
use crate::state::AppState;

/// GET /analyzer
pub async fn show_analyzer(State(state): State<AppState>) -> Html<String> {
    if state.generator.is_none() {
        return render::config_error_page();
    }
    match &state.session.read().await.analysis {
        Some(result) => render::analyzer::results_page(result),
        None => render::analyzer::input_page(None),
    }
}

/// POST /analyzer — multipart form: `resume` file + `job_description` text.
pub async fn submit_analyzer(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let Some(generator) = state.generator.clone() else {
        return Err(AppError::Config);
    };

    let submission = read_submission(&mut multipart).await?;
    let input_with = |feedback| render::analyzer::input_page(Some(&feedback)).into_response();

    let Some(file) = submission.resume else {
        return Ok(input_with(SubmitFeedback::Error(
            "Choose a resume file before submitting.".to_string(),
        )));
    };
    let job_description = submission.job_description.unwrap_or_default();
    if job_description.trim().is_empty() {
        return Ok(input_with(SubmitFeedback::Error(
            "Paste a job description before submitting.".to_string(),
        )));
    }

    let resume_text = match extract_text(&file) {
        Ok(text) => text,
        Err(e) => return Ok(input_with(SubmitFeedback::Error(e.to_string()))),
    };

    let prompt = prompts::analyzer_prompt(&resume_text, &job_description);
    match run_generation::<AnalysisResult>(generator.as_ref(), &prompt).await {
        Ok(result) => {
            state.session.write().await.analysis = Some(result);
            Ok(Redirect::to(Mode::Analyzer.path()).into_response())
        }
        Err(feedback) => Ok(input_with(feedback)),
    }
}

/// POST /analyzer/reset — clears the slot, back to the Input state.
pub async fn reset_analyzer(State(state): State<AppState>) -> Redirect {
    state.session.write().await.analysis = None;
    Redirect::to(Mode::Analyzer.path())
}

/// GET /coach
pub async fn show_coach(State(state): State<AppState>) -> Html<String> {
    if state.generator.is_none() {
        return render::config_error_page();
    }
    match &state.session.read().await.coach {
        Some(result) => render::coach::results_page(result),
        None => render::coach::input_page(None),
    }
}

/// POST /coach — multipart form: `resume` file only.
pub async fn submit_coach(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let Some(generator) = state.generator.clone() else {
        return Err(AppError::Config);
    };

    let submission = read_submission(&mut multipart).await?;
    let input_with = |feedback| render::coach::input_page(Some(&feedback)).into_response();

    let Some(file) = submission.resume else {
        return Ok(input_with(SubmitFeedback::Error(
            "Choose a resume file before submitting.".to_string(),
        )));
    };

    let resume_text = match extract_text(&file) {
        Ok(text) => text,
        Err(e) => return Ok(input_with(SubmitFeedback::Error(e.to_string()))),
    };

    let prompt = prompts::coach_prompt(&resume_text);
    match run_generation::<CoachResult>(generator.as_ref(), &prompt).await {
        Ok(result) => {
            state.session.write().await.coach = Some(result);
            Ok(Redirect::to(Mode::Coach.path()).into_response())
        }
        Err(feedback) => Ok(input_with(feedback)),
    }
}

/// POST /coach/reset
pub async fn reset_coach(State(state): State<AppState>) -> Redirect {
    state.session.write().await.coach = None;
    Redirect::to(Mode::Coach.path())
}

/// One generation request plus response parsing, with failures mapped to
/// the feedback the Input form shows inline.
async fn run_generation<T: serde::de::DeserializeOwned>(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<T, SubmitFeedback> {
    let raw = generator.generate(prompt).await.map_err(|e| {
        SubmitFeedback::Error(format!("The analysis request failed: {e}"))
    })?;

    parse_model_response::<T>(&raw).map_err(|e| SubmitFeedback::RawResponse {
        message: format!("Error parsing the AI response ({e}). Please check the raw output."),
        raw,
    })
}

#[derive(Default)]
struct Submission {
    resume: Option<UploadedFile>,
    job_description: Option<String>,
}

async fn read_submission(multipart: &mut Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form upload: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                let media_type = field.content_type().unwrap_or_default().to_string();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read the upload: {e}")))?;
                submission.resume = Some(UploadedFile {
                    media_type,
                    content,
                });
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read the form: {e}")))?;
                submission.job_description = Some(text);
            }
            _ => {} // unknown fields are ignored
        }
    }

    Ok(submission)
}
