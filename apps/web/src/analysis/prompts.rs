//! Prompt templates for the two analysis modes.
//!
//! Each template spells out the exact JSON object the model must return and
//! forbids markdown fencing (the parser still strips fences defensively —
//! models do not always comply). Extracted text is embedded verbatim; no
//! validation or truncation happens here.

/// Resume Analyzer prompt template. Placeholders: `{resume_text}`, `{job_text}`.
const ANALYZER_PROMPT_TEMPLATE: &str = r#"You are an advanced AI recruitment assistant. Analyze the provided resume against the job description and return a JSON object.
Your response MUST be a valid JSON object without any markdown formatting.

The JSON structure must be:
{
    "match_score": <Number 0-100>,
    "analysis_summary": "<One-paragraph summary of the candidate's suitability>",
    "keywords": {"job_keywords": [], "resume_keywords": [], "missing_keywords": []},
    "strengths": ["<List of strengths>"],
    "areas_for_improvement": ["<List of weaknesses>"],
    "actionable_recommendations": [{"area": "<Area>", "suggestion": "<Suggestion>"}],
    "interview_prep": {
        "technical_questions": ["<5 relevant technical interview questions based on the job description>"],
        "behavioral_questions": ["<5 behavioral questions based on the candidate's experience and the role's demands>"]
    }
}

**Resume Content:** --- {resume_text} ---
**Job Description:** --- {job_text} ---"#;

/// Career Coach prompt template. Placeholder: `{resume_text}`.
const COACH_PROMPT_TEMPLATE: &str = r#"You are an expert AI career coach. Analyze the provided resume and suggest potential career paths.
Your response MUST be a valid JSON object without any markdown formatting.

The JSON structure must be:
{
  "candidate_profile": {
    "summary": "<A summary of the candidate's core profile and experience level>",
    "top_skills": ["<A list of the candidate's most marketable skills>"]
  },
  "suggested_career_paths": [
    {
      "title": "<Suggested Job Title 1>",
      "suitability_reason": "<Why this role is a good fit>",
      "skills_to_develop": ["<Skill A>", "<Skill B>"],
      "next_steps": "<Concrete next steps, e.g., 'Take an online course in...', 'Build a project using...'>"
    },
    {
      "title": "<Suggested Job Title 2>",
      "suitability_reason": "<Why this role is a good fit>",
      "skills_to_develop": ["<Skill A>", "<Skill B>"],
      "next_steps": "<Concrete next steps>"
    },
    {
      "title": "<Suggested Job Title 3>",
      "suitability_reason": "<Why this role is a good fit>",
      "skills_to_develop": ["<Skill A>", "<Skill B>"],
      "next_steps": "<Concrete next steps>"
    }
  ]
}

**Resume Content:** --- {resume_text} ---"#;

/// Builds the Resume Analyzer prompt with both texts embedded verbatim.
pub fn analyzer_prompt(resume_text: &str, job_text: &str) -> String {
    fill(
        ANALYZER_PROMPT_TEMPLATE,
        &[("{resume_text}", resume_text), ("{job_text}", job_text)],
    )
}

/// Builds the Career Coach prompt with the résumé text embedded verbatim.
pub fn coach_prompt(resume_text: &str) -> String {
    fill(COACH_PROMPT_TEMPLATE, &[("{resume_text}", resume_text)])
}

/// Single-pass placeholder substitution over the template. Inserted text is
/// never rescanned, so user input containing a placeholder token stays
/// verbatim in the output.
fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while !rest.is_empty() {
        let next = substitutions
            .iter()
            .filter_map(|(token, value)| rest.find(token).map(|at| (at, *token, *value)))
            .min_by_key(|(at, ..)| *at);
        match next {
            Some((at, token, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + token.len()..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_prompt_embeds_both_texts_verbatim() {
        let resume = "Skilled Go developer\nwith production experience.";
        let job = "Looking for a backend engineer";
        let prompt = analyzer_prompt(resume, job);
        assert!(prompt.contains(resume));
        assert!(prompt.contains(job));
    }

    #[test]
    fn test_analyzer_prompt_specifies_the_response_shape() {
        let prompt = analyzer_prompt("r", "j");
        assert!(prompt.contains("\"match_score\""));
        assert!(prompt.contains("\"interview_prep\""));
        assert!(prompt.contains("without any markdown formatting"));
    }

    #[test]
    fn test_coach_prompt_embeds_resume_verbatim() {
        let resume = "Ten years of embedded C.";
        let prompt = coach_prompt(resume);
        assert!(prompt.contains(resume));
        assert!(prompt.contains("\"suggested_career_paths\""));
    }

    #[test]
    fn test_coach_prompt_asks_for_exactly_three_paths() {
        let prompt = coach_prompt("r");
        assert!(prompt.contains("Suggested Job Title 3"));
        assert!(!prompt.contains("Suggested Job Title 4"));
    }

    #[test]
    fn test_resume_text_containing_placeholder_is_not_resubstituted() {
        let resume = "I once wrote {job_text} in a template engine.";
        let prompt = analyzer_prompt(resume, "backend role");
        assert!(prompt.contains(resume));
    }

    #[test]
    fn test_job_text_containing_placeholder_is_not_resubstituted() {
        let resume = "Skilled Go developer";
        let job = "We want {resume_text} specialists";
        let prompt = analyzer_prompt(resume, job);
        assert!(prompt.contains(job));
        assert!(prompt.contains(resume));
    }

    #[test]
    fn test_both_placeholders_are_filled() {
        let prompt = analyzer_prompt("resume body", "job body");
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_text}"));
    }
}
