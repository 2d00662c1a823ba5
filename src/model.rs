//! Wire model for the analysis service and score classification

use chrono::{DateTime, Utc};
use colored::Color;
use serde::{Deserialize, Serialize};

/// Analysis response returned by the service. Scores are trusted as supplied
/// and never recomputed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub overall_score: u8,
    pub score_category: String,
    pub keyword_score: u8,
    pub formatting_score: u8,
    pub experience_score: u8,
    pub education_score: u8,
    pub skills_score: u8,
    pub contact_score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_elements: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_upload: Option<CvUpload>,
}

/// Upload record nested in the analysis response. Received but not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvUpload {
    pub id: String,
    pub filename: String,
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.overall_score)
    }

    /// Sub-scores paired with their display labels and fixed weights.
    pub fn sub_scores(&self) -> [(&'static str, u8, u8); 6] {
        [
            ("Keyword Optimization", self.keyword_score, 25),
            ("Formatting & Structure", self.formatting_score, 20),
            ("Experience Relevance", self.experience_score, 20),
            ("Education & Certifications", self.education_score, 15),
            ("Skills Match", self.skills_score, 15),
            ("Contact Information", self.contact_score, 5),
        ]
    }
}

/// Four-tier classification shared by the badge, the advisory sentence, and
/// the bar colors. Out-of-range values degrade to the lowest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        if score > 100 {
            return ScoreTier::NeedsImprovement;
        }
        match score {
            80..=100 => ScoreTier::Excellent,
            65..=79 => ScoreTier::Good,
            50..=64 => ScoreTier::Fair,
            _ => ScoreTier::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::Good => "Good",
            ScoreTier::Fair => "Fair",
            ScoreTier::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ScoreTier::Excellent => Color::Green,
            ScoreTier::Good => Color::Blue,
            ScoreTier::Fair => Color::Yellow,
            ScoreTier::NeedsImprovement => Color::Red,
        }
    }

    pub fn advisory(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Outstanding! Your CV is highly optimized for ATS systems.",
            ScoreTier::Good => "Great job! Your CV should pass most ATS systems.",
            ScoreTier::Fair => "Good start. Consider the improvements below to boost your score.",
            ScoreTier::NeedsImprovement => {
                "Your CV needs work. Follow the recommendations to improve ATS compatibility."
            }
        }
    }
}
