use regex::{Regex, RegexBuilder};

use crate::{sanitize_content, KeywordError, NormalizedJob};

/// Case-insensitive whole-word matcher compiled once from a keyword list.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    /// Build a matcher from user keywords. Blank keywords are ignored; returns
    /// `Ok(None)` when nothing is left to match on.
    ///
    /// Keywords are escaped, so `C++` or `.NET` match literally. Word
    /// boundaries are asserted on keyword edges that are word characters, so
    /// `ui` does not match inside `build` while `C++` still matches in
    /// `C++ developer`.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Option<Self>, KeywordError> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .map(bounded_literal)
            .collect();
        if alternatives.is_empty() {
            return Ok(None);
        }

        let pattern = RegexBuilder::new(&format!("(?:{})", alternatives.join("|")))
            .case_insensitive(true)
            .build()
            .map_err(|err| KeywordError::PatternTooLarge {
                count: alternatives.len(),
                message: err.to_string(),
            })?;
        Ok(Some(Self { pattern }))
    }

    pub fn is_match(&self, job: &NormalizedJob) -> bool {
        self.pattern.is_match(&searchable_text(job))
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Keep only the jobs that mention at least one keyword as a whole word.
/// An empty keyword list keeps everything. Input order is preserved.
pub fn filter_jobs<S: AsRef<str>>(
    jobs: Vec<NormalizedJob>,
    keywords: &[S],
) -> Result<Vec<NormalizedJob>, KeywordError> {
    let Some(matcher) = KeywordMatcher::new(keywords)? else {
        return Ok(jobs);
    };
    Ok(jobs.into_iter().filter(|job| matcher.is_match(job)).collect())
}

/// Title, sanitized content and department names joined by spaces.
pub fn searchable_text(job: &NormalizedJob) -> String {
    let content = sanitize_content(&job.content);
    let departments = job.departments.join(" ");
    format!("{} {} {}", job.title, content, departments)
}

fn bounded_literal(keyword: &str) -> String {
    let escaped = regex::escape(keyword);
    let starts_word = keyword.chars().next().is_some_and(is_word_char);
    let ends_word = keyword.chars().next_back().is_some_and(is_word_char);
    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        escaped,
        if ends_word { r"\b" } else { "" }
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::bounded_literal;

    #[test]
    fn word_keywords_get_both_boundaries() {
        assert_eq!(bounded_literal("rust"), r"\brust\b");
    }

    #[test]
    fn symbol_edges_skip_the_boundary() {
        assert_eq!(bounded_literal("C++"), r"\bC\+\+");
        assert_eq!(bounded_literal(".NET"), r"\.NET\b");
    }
}
