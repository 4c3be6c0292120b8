//! Problem value objects
//!
//! A [`Problem`] is one prompt/expected-answer pair; a [`ProblemSet`] is
//! the ordered list a session is driven by. Both are immutable once
//! built — the session driver iterates the set but never changes it.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single quiz problem: a prompt and the one answer that counts
///
/// The matching rule is owned by the problem itself: a candidate answer
/// is trimmed of surrounding whitespace, then compared exactly and
/// case-sensitively to the expected answer.
///
/// # Example
///
/// ```
/// use drill_domain::Problem;
///
/// let p = Problem::new("2+2", "4").unwrap();
/// assert!(p.is_correct("4"));
/// assert!(p.is_correct("  4\n"));
/// assert!(!p.is_correct("four"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    prompt: String,
    expected: String,
}

impl Problem {
    /// Create a new problem
    ///
    /// The expected answer is trimmed once at construction so that a
    /// problem file with stray padding around the answer column still
    /// matches what the user actually types.
    pub fn new(
        prompt: impl Into<String>,
        expected: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        let expected = expected.into().trim().to_string();

        if prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        if expected.is_empty() {
            return Err(DomainError::EmptyAnswer);
        }

        Ok(Self { prompt, expected })
    }

    /// The text shown to the user
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The expected answer
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Check a typed answer against the expected one
    ///
    /// Trimming is an explicit step here; callers must not rely on the
    /// input source having stripped line terminators.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim() == self.expected
    }
}

/// An ordered, immutable collection of problems
///
/// Order is significant: the session driver presents problems front to
/// back and a deadline cuts the tail off, so whoever builds the set
/// decides the order (e.g. by shuffling before the session starts).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    /// Create a problem set from an already-ordered list
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    /// Number of problems in the set
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Whether the set holds no problems
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Iterate the problems in presentation order
    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.problems.iter()
    }

    /// Borrow the problems as a slice
    pub fn as_slice(&self) -> &[Problem] {
        &self.problems
    }

    /// Consume the set and return the inner list
    pub fn into_inner(self) -> Vec<Problem> {
        self.problems
    }
}

impl From<Vec<Problem>> for ProblemSet {
    fn from(problems: Vec<Problem>) -> Self {
        Self::new(problems)
    }
}

impl<'a> IntoIterator for &'a ProblemSet {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.problems.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_creation() {
        let p = Problem::new("capital of France", "Paris").unwrap();
        assert_eq!(p.prompt(), "capital of France");
        assert_eq!(p.expected(), "Paris");
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert!(matches!(
            Problem::new("  ", "4"),
            Err(DomainError::EmptyPrompt)
        ));
    }

    #[test]
    fn test_empty_answer_rejected() {
        assert!(matches!(
            Problem::new("2+2", " \t"),
            Err(DomainError::EmptyAnswer)
        ));
    }

    #[test]
    fn test_expected_answer_trimmed_at_construction() {
        let p = Problem::new("2+2", " 4 ").unwrap();
        assert_eq!(p.expected(), "4");
        assert!(p.is_correct("4"));
    }

    #[test]
    fn test_answer_trimmed_before_comparison() {
        let p = Problem::new("2+2", "4").unwrap();
        assert!(p.is_correct("4"));
        assert!(p.is_correct("  4  "));
        assert!(p.is_correct("4\r\n"));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let p = Problem::new("capital of France", "Paris").unwrap();
        assert!(p.is_correct("Paris"));
        assert!(!p.is_correct("paris"));
        assert!(!p.is_correct("PARIS"));
    }

    #[test]
    fn test_inner_whitespace_not_collapsed() {
        let p = Problem::new("name", "New York").unwrap();
        assert!(p.is_correct(" New York "));
        assert!(!p.is_correct("New  York"));
    }

    #[test]
    fn test_problem_set_order_preserved() {
        let set = ProblemSet::new(vec![
            Problem::new("a", "1").unwrap(),
            Problem::new("b", "2").unwrap(),
        ]);
        let prompts: Vec<_> = set.iter().map(Problem::prompt).collect();
        assert_eq!(prompts, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_problem_set() {
        let set = ProblemSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }
}
