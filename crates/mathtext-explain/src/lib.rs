//! Mathtext Explain
//!
//! This crate models the structured topic explanations produced by the
//! explanation backend and renders every text field of them with a
//! [`Renderer`].
//!
//! # Overview
//!
//! - [`model`] - [`Explanation`] and the [`Payload`] response shapes
//! - [`delimiters`] - wrapping bare LaTeX in `$$...$$`
//! - [`mcq`] - multiple-choice answer checking
//!
//! # Example
//!
//! ```
//! use mathtext_explain::{render_payload, Payload};
//! use mathtext_render::Renderer;
//!
//! let payload = Payload::from_json(r#"{"rawContent": "Speed is $v$"}"#).unwrap();
//! let rendered = render_payload(&Renderer::default(), &payload);
//! assert_eq!(
//!     rendered,
//!     Payload::Raw {
//!         raw_content: r#"Speed is <span class="math math-inline">v</span>"#.into()
//!     }
//! );
//! ```

pub mod delimiters;
pub mod mcq;
pub mod model;

pub use delimiters::{ensure_latex_delimiters, has_latex, repair_value};
pub use mcq::Feedback;
pub use model::{Explanation, Mcq, Payload, SolutionStep, Step, WorkedExample};

use log::debug;
use mathtext_render::Renderer;

/// Render every text field of an explanation to markup.
///
/// Bare LaTeX is wrapped in delimiters before rendering.
pub fn render_explanation(renderer: &Renderer, explanation: &Explanation) -> Explanation {
    debug!("rendering explanation {:?}", explanation.title);
    explanation.map_text(|text| renderer.render(&ensure_latex_delimiters(text)))
}

/// Render any payload shape to markup.
///
/// Error messages are escaped like any other text.
pub fn render_payload(renderer: &Renderer, payload: &Payload) -> Payload {
    match payload {
        Payload::Explanation(explanation) => {
            Payload::Explanation(Box::new(render_explanation(renderer, explanation)))
        }
        Payload::Raw { raw_content } => Payload::Raw {
            raw_content: renderer.render(raw_content),
        },
        Payload::Error { error } => Payload::Error {
            error: renderer.render(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathtext_core::MathTextError;

    const EXPLANATION_JSON: &str = r#"{
        "title": "Kinematics",
        "overview": "Motion with constant $a$.",
        "steps": [
            { "stepNumber": 1, "title": "Velocity", "content": "v = u + a t\n\\Delta v = a \\Delta t" }
        ],
        "workedExample": {
            "problem": "A car starts from rest.",
            "given": ["$u = 0$ m/s", "$t = 4$ s"],
            "toFind": "$a = ?$",
            "solution": [
                { "step": 1, "explanation": "Use the definition", "calculation": "a = \\frac{10}{4}" }
            ],
            "answer": "$a = 2.5$ m/s²"
        },
        "mcq": {
            "question": "Which is correct?",
            "options": ["A) $2.5$", "B) $4$"],
            "correctAnswer": "A",
            "explanation": "Divide by time.",
            "wrongAnswerExplanations": { "B": "That is the time." }
        },
        "keyTakeaways": ["a < b & c"]
    }"#;

    fn explanation() -> Explanation {
        match Payload::from_json(EXPLANATION_JSON).unwrap() {
            Payload::Explanation(e) => *e,
            other => panic!("expected explanation, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_explanation() {
        let e = explanation();
        assert_eq!(e.title, "Kinematics");
        assert_eq!(e.steps[0].step_number, 1);
        assert_eq!(e.worked_example.given.len(), 2);
        assert_eq!(e.mcq.correct_answer, "A");
        assert_eq!(e.mcq.wrong_answer_explanations["B"], "That is the time.");
    }

    #[test]
    fn test_parse_raw_and_error() {
        assert_eq!(
            Payload::from_json(r#"{"rawContent": "text"}"#).unwrap(),
            Payload::Raw {
                raw_content: "text".into()
            }
        );
        assert_eq!(
            Payload::from_json(r#"{"error": "boom"}"#).unwrap(),
            Payload::Error {
                error: "boom".into()
            }
        );
    }

    #[test]
    fn test_parse_invalid_is_json_error() {
        let err = Payload::from_json(r#"{"unexpected": 1}"#).unwrap_err();
        assert!(matches!(err, MathTextError::Json(_)));
        assert!(matches!(
            Payload::from_json("not json").unwrap_err(),
            MathTextError::Json(_)
        ));
    }

    #[test]
    fn test_repair_delimiters() {
        let repaired = explanation().repair_delimiters();
        assert_eq!(
            repaired.steps[0].content,
            "v = u + a t\n$$\\Delta v = a \\Delta t$$"
        );
        assert_eq!(
            repaired.worked_example.solution[0].calculation,
            "$$a = \\frac{10}{4}$$"
        );
        assert_eq!(repaired.overview, "Motion with constant $a$.");
    }

    #[test]
    fn test_from_json_repaired_matches_repair_delimiters() {
        let repaired = Payload::from_json_repaired(EXPLANATION_JSON).unwrap();
        assert_eq!(
            repaired,
            Payload::Explanation(Box::new(explanation().repair_delimiters()))
        );
    }

    #[test]
    fn test_map_text_keeps_numbers_and_letters() {
        let mapped = explanation().map_text(|s| s.to_uppercase());
        assert_eq!(mapped.title, "KINEMATICS");
        assert_eq!(mapped.steps[0].step_number, 1);
        assert_eq!(mapped.mcq.correct_answer, "A");
        assert_eq!(mapped.mcq.wrong_answer_explanations["B"], "THAT IS THE TIME.");
    }

    #[test]
    fn test_render_explanation() {
        let rendered = render_explanation(&Renderer::default(), &explanation());
        assert_eq!(
            rendered.overview,
            r#"Motion with constant <span class="math math-inline">a</span>."#
        );
        assert_eq!(rendered.key_takeaways[0], "a &lt; b &amp; c");
        assert_eq!(
            rendered.worked_example.solution[0].calculation,
            r#"<div class="math-display"><span class="math math-display">a = (10/4)</span></div>"#
        );
        assert!(rendered.mcq.options[0].starts_with("A) "));
    }

    #[test]
    fn test_render_error_payload_is_escaped() {
        let rendered = render_payload(
            &Renderer::default(),
            &Payload::Error {
                error: "<b>failed</b>".into(),
            },
        );
        assert_eq!(
            rendered,
            Payload::Error {
                error: "&lt;b&gt;failed&lt;/b&gt;".into()
            }
        );
    }

    #[test]
    fn test_rendered_payload_serializes_with_same_shape() {
        let payload = Payload::from_json(EXPLANATION_JSON).unwrap();
        let rendered = render_payload(&Renderer::default(), &payload);
        let json = rendered.to_json_pretty().unwrap();
        assert!(json.contains("\"workedExample\""));
        assert!(json.contains("\"wrongAnswerExplanations\""));
        assert!(matches!(
            Payload::from_json(&json).unwrap(),
            Payload::Explanation(_)
        ));
    }
}
