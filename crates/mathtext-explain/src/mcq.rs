//! Multiple-choice answer checking.

use crate::model::Mcq;

/// Result of answering a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback<'a> {
    /// The chosen letter was correct
    Correct {
        /// Why it is correct
        explanation: &'a str,
    },
    /// The chosen letter was wrong
    Incorrect {
        /// Letter of the correct option
        correct: &'a str,
        /// Why the correct option is right
        explanation: &'a str,
        /// Why the chosen option is wrong, if the question says
        why_wrong: Option<&'a str>,
    },
}

impl Feedback<'_> {
    /// Check if the answer was correct.
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct { .. })
    }
}

/// The answer letter of an option: its first character.
///
/// # Example
/// ```
/// use mathtext_explain::mcq::option_letter;
///
/// assert_eq!(option_letter("B) 9.8 m/s²"), Some("B"));
/// assert_eq!(option_letter(""), None);
/// ```
pub fn option_letter(option: &str) -> Option<&str> {
    let first = option.chars().next()?;
    Some(&option[..first.len_utf8()])
}

impl Mcq {
    /// Check whether `letter` is the correct answer.
    pub fn is_correct(&self, letter: &str) -> bool {
        letter.trim() == self.correct_answer.trim()
    }

    /// Feedback for choosing `letter`.
    pub fn feedback(&self, letter: &str) -> Feedback<'_> {
        if self.is_correct(letter) {
            return Feedback::Correct {
                explanation: &self.explanation,
            };
        }
        Feedback::Incorrect {
            correct: self.correct_answer.trim(),
            explanation: &self.explanation,
            why_wrong: self
                .wrong_answer_explanations
                .get(letter.trim())
                .map(String::as_str),
        }
    }

    /// Feedback for choosing the option at `index`.
    ///
    /// Returns `None` if there is no such option.
    pub fn choose(&self, index: usize) -> Option<Feedback<'_>> {
        let letter = option_letter(self.options.get(index)?)?;
        Some(self.feedback(letter))
    }

    /// Index of the correct option, if one of the options carries its letter.
    pub fn correct_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option_letter(option).is_some_and(|l| self.is_correct(l)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn mcq() -> Mcq {
        Mcq {
            question: "What is $g$ near the surface?".to_string(),
            options: vec![
                "A) $9.8$ m/s²".to_string(),
                "B) $1.6$ m/s²".to_string(),
                "C) $3.7$ m/s²".to_string(),
                "D) $0$".to_string(),
            ],
            correct_answer: "A".to_string(),
            explanation: "Standard gravity is about 9.8 m/s².".to_string(),
            wrong_answer_explanations: BTreeMap::from([
                ("B".to_string(), "That is the Moon.".to_string()),
                ("C".to_string(), "That is Mars.".to_string()),
            ]),
        }
    }

    #[test]
    fn test_correct_answer() {
        let q = mcq();
        assert!(q.is_correct("A"));
        assert!(!q.is_correct("B"));
        assert_eq!(
            q.feedback("A"),
            Feedback::Correct {
                explanation: "Standard gravity is about 9.8 m/s²."
            }
        );
    }

    #[test]
    fn test_wrong_answer_with_explanation() {
        let q = mcq();
        let feedback = q.feedback("B");
        assert!(!feedback.is_correct());
        assert_eq!(
            feedback,
            Feedback::Incorrect {
                correct: "A",
                explanation: "Standard gravity is about 9.8 m/s².",
                why_wrong: Some("That is the Moon."),
            }
        );
    }

    #[test]
    fn test_wrong_answer_without_explanation() {
        let q = mcq();
        match q.feedback("D") {
            Feedback::Incorrect { why_wrong, .. } => assert_eq!(why_wrong, None),
            other => panic!("unexpected feedback: {:?}", other),
        }
    }

    #[test]
    fn test_choose_by_index() {
        let q = mcq();
        assert!(q.choose(0).unwrap().is_correct());
        assert!(!q.choose(2).unwrap().is_correct());
        assert!(q.choose(9).is_none());
        assert_eq!(q.correct_index(), Some(0));
    }

    #[test]
    fn test_option_letter_multibyte() {
        assert_eq!(option_letter("αβ"), Some("α"));
    }
}
