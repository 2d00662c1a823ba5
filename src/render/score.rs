//! Aggregate score view with the counting-up gauge animation

use crate::model::{AnalysisResult, ScoreTier};
use colored::{Color, Colorize};
use std::io::Write;
use std::time::Duration;

pub const ANIMATION_STEPS: u32 = 60;
pub const ANIMATION_DURATION_MS: u64 = 2000;

const GAUGE_WIDTH: usize = 40;

/// The sequence of displayed values for one animation run: a leading zero
/// frame, then sixty rounded steps. Non-decreasing, capped at the target,
/// and the final frame is exactly the target.
pub fn animation_frames(target: u8) -> Vec<u8> {
    let mut frames = Vec::with_capacity(ANIMATION_STEPS as usize + 1);
    frames.push(0);
    for step in 1..=ANIMATION_STEPS {
        let value = (step as f64 * target as f64 / ANIMATION_STEPS as f64).round() as u8;
        frames.push(value.min(target));
    }
    frames
}

pub struct ScoreView {
    use_colors: bool,
}

impl ScoreView {
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

    fn gauge_line(&self, displayed: u8, color: Color) -> String {
        let filled = (displayed as usize * GAUGE_WIDTH) / 100;
        let bar = format!(
            "{}{}",
            self.colorize(&"█".repeat(filled), color),
            "░".repeat(GAUGE_WIDTH - filled)
        );
        format!("  [{}] {:>3}%", bar, displayed)
    }

    /// The full static view for a result: title, gauge at the final value,
    /// category badge, and the advisory line.
    pub fn render(&self, result: &AnalysisResult) -> String {
        let tier = result.tier();
        let mut output = String::new();
        output.push_str("\n🎯 ATS Compatibility Score\n\n");
        output.push_str(&self.gauge_line(result.overall_score, tier.color()));
        output.push('\n');
        output.push_str(&format!("\n  {}\n", self.badge(&result.score_category, tier)));
        output.push_str(&format!("  {}\n", tier.advisory()));
        output
    }

    fn badge(&self, category: &str, tier: ScoreTier) -> String {
        if self.use_colors {
            format!("[{}]", category.color(tier.color()).bold())
        } else {
            format!("[{}]", category)
        }
    }

    /// Redraw the gauge in place for each animation frame, then print the
    /// full view. The ticker lives and dies inside this call. When `animate`
    /// is false only the final view is printed.
    pub fn present<W: Write>(&self, out: &mut W, result: &AnalysisResult, animate: bool) -> std::io::Result<()> {
        if animate {
            let tier = result.tier();
            let step = Duration::from_millis(ANIMATION_DURATION_MS / ANIMATION_STEPS as u64);
            writeln!(out, "\n🎯 ATS Compatibility Score\n")?;
            for frame in animation_frames(result.overall_score) {
                write!(out, "\r{}", self.gauge_line(frame, tier.color()))?;
                out.flush()?;
                std::thread::sleep(step);
            }
            writeln!(out)?;
            writeln!(out, "\n  {}", self.badge(&result.score_category, tier))?;
            writeln!(out, "  {}", tier.advisory())?;
        } else {
            write!(out, "{}", self.render(result))?;
        }
        Ok(())
    }
}
