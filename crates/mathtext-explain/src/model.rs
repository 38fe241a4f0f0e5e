//! Explanation payload data model.
//!
//! Field names follow the camelCase JSON produced by the explanation
//! backend.

use mathtext_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A structured explanation of one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    /// Topic name
    pub title: String,
    /// Short overview
    pub overview: String,
    /// Step-by-step concept breakdown
    pub steps: Vec<Step>,
    /// A solved problem
    pub worked_example: WorkedExample,
    /// Multiple-choice check question
    pub mcq: Mcq,
    /// Points to remember
    pub key_takeaways: Vec<String>,
}

/// One step of the concept breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step_number: u32,
    pub title: String,
    pub content: String,
}

/// A worked problem with its solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkedExample {
    pub problem: String,
    #[serde(default)]
    pub given: Vec<String>,
    pub to_find: String,
    pub solution: Vec<SolutionStep>,
    pub answer: String,
}

/// One step of a worked solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionStep {
    pub step: u32,
    pub explanation: String,
    pub calculation: String,
}

/// Multiple-choice question.
///
/// Each option starts with its answer letter, e.g. `"A) 2.5 m/s"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    /// Letter of the correct option
    pub correct_answer: String,
    /// Why the correct option is right
    pub explanation: String,
    /// Why each wrong option is wrong, keyed by letter
    #[serde(default)]
    pub wrong_answer_explanations: BTreeMap<String, String>,
}

/// Any of the response shapes the explanation backend produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// A structured explanation
    Explanation(Box<Explanation>),
    /// Unstructured text returned when no structured result was available
    Raw {
        #[serde(rename = "rawContent")]
        raw_content: String,
    },
    /// An error message
    Error { error: String },
}

impl Payload {
    /// Parse a payload from JSON.
    ///
    /// # Example
    /// ```
    /// use mathtext_explain::Payload;
    ///
    /// let payload = Payload::from_json(r#"{"error": "Rate limit exceeded"}"#).unwrap();
    /// assert_eq!(payload, Payload::Error { error: "Rate limit exceeded".into() });
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a payload from JSON, wrapping bare LaTeX in delimiters first.
    pub fn from_json_repaired(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(serde_json::from_value(crate::repair_value(value))?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Explanation {
    /// Produce a new explanation with `f` applied to every text field.
    ///
    /// Numbers, the correct-answer letter and the keys of the wrong-answer
    /// map are copied unchanged.
    pub fn map_text<F>(&self, mut f: F) -> Explanation
    where
        F: FnMut(&str) -> String,
    {
        Explanation {
            title: f(&self.title),
            overview: f(&self.overview),
            steps: self
                .steps
                .iter()
                .map(|step| Step {
                    step_number: step.step_number,
                    title: f(&step.title),
                    content: f(&step.content),
                })
                .collect(),
            worked_example: WorkedExample {
                problem: f(&self.worked_example.problem),
                given: map_all(&self.worked_example.given, &mut f),
                to_find: f(&self.worked_example.to_find),
                solution: self
                    .worked_example
                    .solution
                    .iter()
                    .map(|s| SolutionStep {
                        step: s.step,
                        explanation: f(&s.explanation),
                        calculation: f(&s.calculation),
                    })
                    .collect(),
                answer: f(&self.worked_example.answer),
            },
            mcq: Mcq {
                question: f(&self.mcq.question),
                options: map_all(&self.mcq.options, &mut f),
                correct_answer: self.mcq.correct_answer.clone(),
                explanation: f(&self.mcq.explanation),
                wrong_answer_explanations: self
                    .mcq
                    .wrong_answer_explanations
                    .iter()
                    .map(|(letter, why)| (letter.clone(), f(why)))
                    .collect(),
            },
            key_takeaways: map_all(&self.key_takeaways, &mut f),
        }
    }

    /// Wrap bare LaTeX in every text field in delimiters.
    pub fn repair_delimiters(&self) -> Explanation {
        self.map_text(|s| crate::ensure_latex_delimiters(s).into_owned())
    }
}

fn map_all<F>(items: &[String], f: &mut F) -> Vec<String>
where
    F: FnMut(&str) -> String,
{
    items.iter().map(|s| f(s)).collect()
}
