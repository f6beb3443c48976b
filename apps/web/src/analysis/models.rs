//! Typed shapes of the model's JSON responses.
//!
//! Every field is `#[serde(default)]`: a structurally incomplete but valid
//! JSON object still deserializes, and the views render the fallbacks (a
//! missing score shows as 0, a missing list as empty). A result is stored
//! whole or not at all — partial results never exist.

use serde::{Deserialize, Serialize};

/// Result of the Resume Analyzer mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub match_score: u32,
    #[serde(default)]
    pub analysis_summary: String,
    #[serde(default)]
    pub keywords: KeywordReport,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
    #[serde(default)]
    pub actionable_recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub interview_prep: InterviewPrep,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordReport {
    #[serde(default)]
    pub job_keywords: Vec<String>,
    #[serde(default)]
    pub resume_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub suggestion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewPrep {
    #[serde(default)]
    pub technical_questions: Vec<String>,
    #[serde(default)]
    pub behavioral_questions: Vec<String>,
}

/// Result of the AI Career Coach mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachResult {
    #[serde(default)]
    pub candidate_profile: CandidateProfile,
    /// The prompt asks for exactly three paths; the view renders whatever
    /// count actually came back.
    #[serde(default)]
    pub suggested_career_paths: Vec<CareerPath>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub top_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerPath {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub suitability_reason: String,
    #[serde(default)]
    pub skills_to_develop: Vec<String>,
    #[serde(default)]
    pub next_steps: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_analysis_result_deserializes() {
        let json = r#"{
            "match_score": 82,
            "analysis_summary": "Strong backend candidate.",
            "keywords": {
                "job_keywords": ["Go", "Kubernetes"],
                "resume_keywords": ["Go"],
                "missing_keywords": ["Kubernetes"]
            },
            "strengths": ["Go expertise"],
            "areas_for_improvement": ["No Kubernetes experience"],
            "actionable_recommendations": [
                {"area": "DevOps", "suggestion": "Deploy a side project on Kubernetes"}
            ],
            "interview_prep": {
                "technical_questions": ["Q1", "Q2", "Q3", "Q4", "Q5"],
                "behavioral_questions": ["B1", "B2", "B3", "B4", "B5"]
            }
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.match_score, 82);
        assert_eq!(result.keywords.missing_keywords, vec!["Kubernetes"]);
        assert_eq!(result.actionable_recommendations[0].area, "DevOps");
        assert_eq!(result.interview_prep.technical_questions.len(), 5);
    }

    #[test]
    fn test_missing_match_score_defaults_to_zero() {
        let json = r#"{"analysis_summary": "No score provided."}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.match_score, 0);
        assert_eq!(result.analysis_summary, "No score provided.");
        assert!(result.strengths.is_empty());
        assert!(result.interview_prep.technical_questions.is_empty());
    }

    #[test]
    fn test_empty_object_is_a_valid_analysis_result() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.match_score, 0);
        assert!(result.keywords.job_keywords.is_empty());
    }

    #[test]
    fn test_coach_result_with_three_paths_deserializes() {
        let json = r#"{
            "candidate_profile": {
                "summary": "Mid-level backend engineer.",
                "top_skills": ["Go", "SQL"]
            },
            "suggested_career_paths": [
                {"title": "Platform Engineer", "suitability_reason": "r1",
                 "skills_to_develop": ["Kubernetes"], "next_steps": "n1"},
                {"title": "SRE", "suitability_reason": "r2",
                 "skills_to_develop": ["Observability"], "next_steps": "n2"},
                {"title": "Backend Lead", "suitability_reason": "r3",
                 "skills_to_develop": ["Mentoring"], "next_steps": "n3"}
            ]
        }"#;

        let result: CoachResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.suggested_career_paths.len(), 3);
        assert_eq!(result.suggested_career_paths[1].title, "SRE");
        assert_eq!(result.candidate_profile.top_skills, vec!["Go", "SQL"]);
    }

    #[test]
    fn test_coach_result_defaults_when_fields_missing() {
        let result: CoachResult = serde_json::from_str("{}").unwrap();
        assert!(result.candidate_profile.summary.is_empty());
        assert!(result.suggested_career_paths.is_empty());
    }
}
