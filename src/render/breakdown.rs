//! Breakdown view: weighted category bars and feedback lists

use crate::model::{AnalysisResult, ScoreTier};
use colored::{Color, Colorize};

const BAR_WIDTH: usize = 30;

pub struct BreakdownView {
    use_colors: bool,
}

impl BreakdownView {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bar_line(&self, label: &str, score: u8, weight: u8) -> String {
        let color = ScoreTier::from_score(score).color();
        let filled = (score.min(100) as usize * BAR_WIDTH) / 100;
        let bar = format!(
            "{}{}",
            self.colorize(&"█".repeat(filled), color),
            "░".repeat(BAR_WIDTH - filled)
        );
        format!(
            "  {:<28} [{}] {:>3}%  (weight: {}%)\n",
            label, bar, score, weight
        )
    }

    fn list_section(
        &self,
        output: &mut String,
        title: &str,
        marker: &str,
        color: Color,
        items: &[String],
    ) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("\n{}\n", title));
        for item in items {
            output.push_str(&format!("  {} {}\n", self.colorize(marker, color), item));
        }
    }

    /// Six weighted bars in fixed order, then the three feedback lists, each
    /// rendered only when non-empty, items in received order.
    pub fn render(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();
        output.push_str("\n📊 Detailed Analysis\n\n");
        for (label, score, weight) in result.sub_scores() {
            output.push_str(&self.bar_line(label, score, weight));
        }

        self.list_section(
            &mut output,
            "✅ Strengths",
            "✓",
            Color::Green,
            &result.strengths,
        );
        self.list_section(
            &mut output,
            "💡 Recommendations",
            "→",
            Color::Yellow,
            &result.improvements,
        );
        self.list_section(
            &mut output,
            "❌ Missing Elements",
            "✗",
            Color::Red,
            &result.missing_elements,
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn result_with_lists(
        strengths: Vec<String>,
        improvements: Vec<String>,
        missing: Vec<String>,
    ) -> AnalysisResult {
        AnalysisResult {
            id: "x".to_string(),
            overall_score: 70,
            score_category: "Good".to_string(),
            keyword_score: 70,
            formatting_score: 80,
            experience_score: 65,
            education_score: 75,
            skills_score: 68,
            contact_score: 90,
            strengths,
            improvements,
            missing_elements: missing,
            analyzed_at: Utc::now(),
            extracted_text: None,
            cv_upload: None,
        }
    }

    #[test]
    fn test_all_six_bars_present() {
        let view = BreakdownView::new(false);
        let text = view.render(&result_with_lists(vec![], vec![], vec![]));
        for label in [
            "Keyword Optimization",
            "Formatting & Structure",
            "Experience Relevance",
            "Education & Certifications",
            "Skills Match",
            "Contact Information",
        ] {
            assert!(text.contains(label), "missing bar for {}", label);
        }
        assert!(text.contains("(weight: 25%)"));
        assert!(text.contains("(weight: 5%)"));
    }

    #[test]
    fn test_empty_lists_are_suppressed() {
        let view = BreakdownView::new(false);
        let text = view.render(&result_with_lists(
            vec![],
            vec!["Add more keywords".to_string()],
            vec![],
        ));
        assert!(!text.contains("Strengths"));
        assert!(text.contains("Recommendations"));
        assert!(text.contains("→ Add more keywords"));
        assert!(!text.contains("Missing Elements"));
    }

    #[test]
    fn test_items_render_in_received_order() {
        let view = BreakdownView::new(false);
        let text = view.render(&result_with_lists(
            vec!["first".to_string(), "second".to_string()],
            vec![],
            vec![],
        ));
        let first = text.find("✓ first").unwrap();
        let second = text.find("✓ second").unwrap();
        assert!(first < second);
    }
}
