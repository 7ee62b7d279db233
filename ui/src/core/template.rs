//! The instruction every judge received alongside a rendered image.

use super::model::Criterion;

const PLACEHOLDER: &str = "{PROMPT_TEXT}";

pub const EVALUATION_TEMPLATE: &str = r#"You are evaluating an image generated from an SVG.

The original prompt was:
"{PROMPT_TEXT}"

Score the image from 0 to 100 on each criterion:
- Prompt adherence (30% weight): How well does the image match the prompt?
- Structural correctness (20% weight): Are objects drawn correctly and recognizably?
- Physical plausibility (20% weight): Does the scene make physical/spatial sense?
- Completeness (15% weight): Are all requested elements present?
- Visual coherence (15% weight): Is the style consistent and clear?

Return ONLY valid JSON with this exact structure:
{
  "prompt_adherence": <number 0-100>,
  "structural_correctness": <number 0-100>,
  "physical_plausibility": <number 0-100>,
  "completeness": <number 0-100>,
  "visual_coherence": <number 0-100>,
  "total_score": <weighted average>,
  "notes": "<brief explanation>"
}"#;

/// The template with the prompt substituted in.
pub fn evaluation_prompt(prompt_text: &str) -> String {
    EVALUATION_TEMPLATE.replace(PLACEHOLDER, prompt_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_substituted_once() {
        let filled = evaluation_prompt("A pelican riding a bicycle");
        assert!(filled.contains("\"A pelican riding a bicycle\""));
        assert!(!filled.contains(PLACEHOLDER));
    }

    #[test]
    fn template_lists_every_criterion_with_its_weight() {
        for criterion in Criterion::ALL {
            assert!(EVALUATION_TEMPLATE.contains(&format!("\"{}\"", criterion.field())));
            assert!(EVALUATION_TEMPLATE.contains(&format!("({} weight)", criterion.weight_label())));
        }
    }
}
