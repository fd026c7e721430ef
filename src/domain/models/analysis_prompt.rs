use crate::domain::Language;

/// Texts longer than this many characters are cut before prompting.
pub const MAX_ANALYSIS_CHARS: usize = 4000;

/// Appended after the kept prefix of a truncated text.
pub const TRUNCATION_MARKER: &str = "\n# (Truncated for analysis)";

// The preamble is sent verbatim, indentation included. The JSON block is a
// hint for the model; nothing parses the reply against it.
const PREAMBLE_HEAD: &str = "
        You are an expert software engineer.

        Analyze the following ";

const PREAMBLE_TAIL: &str = " code and provide:
        1. Estimated cyclomatic complexity.
        2. Key areas where the code could be improved.
        3. Potential bugs or inefficiencies.
        4. Suggestions for cleaner structure or optimization.

        5. Return the result in the following JSON format exactly, without extra explanation:

        {
        \"filename\": \"filename.py\",
        \"data\": [
            {
            \"function_name\": \"process_data\",
            \"complexity\": 12,
            \"line_no\": 11
            },
            {
            \"function_name\": \"clean_text\",
            \"complexity\": 5,
            \"line_no\": 35
            }
        ]
        }

        Code:
        ";

/// Keeps the first [`MAX_ANALYSIS_CHARS`] characters and appends
/// [`TRUNCATION_MARKER`]. Shorter texts come back unchanged.
pub fn truncate_for_analysis(text: &str) -> String {
    match text.char_indices().nth(MAX_ANALYSIS_CHARS) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
            truncated.push_str(&text[..cut]);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text.to_string(),
    }
}

/// Instruction block naming the language, followed by the (truncated) code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    text: String,
}

impl AnalysisPrompt {
    pub fn build(language: Language, code: &str) -> Self {
        let code = truncate_for_analysis(code);
        let language = language.as_str();

        let mut text = String::with_capacity(
            PREAMBLE_HEAD.len() + language.len() + PREAMBLE_TAIL.len() + code.len(),
        );
        text.push_str(PREAMBLE_HEAD);
        text.push_str(language);
        text.push_str(PREAMBLE_TAIL);
        text.push_str(&code);

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_text_to_limit_plus_marker() {
        let text = "a".repeat(5000);
        let truncated = truncate_for_analysis(&text);

        assert_eq!(truncated, format!("{}{}", "a".repeat(4000), TRUNCATION_MARKER));
        assert_eq!(truncated.len(), 4000 + TRUNCATION_MARKER.len());
    }

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_for_analysis(""), "");
        assert_eq!(truncate_for_analysis("def f(): pass"), "def f(): pass");

        let exactly_at_limit = "b".repeat(MAX_ANALYSIS_CHARS);
        assert_eq!(truncate_for_analysis(&exactly_at_limit), exactly_at_limit);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_ANALYSIS_CHARS + 1);
        let truncated = truncate_for_analysis(&text);

        let kept = truncated.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(kept.chars().count(), MAX_ANALYSIS_CHARS);

        let at_limit = "é".repeat(MAX_ANALYSIS_CHARS);
        assert_eq!(truncate_for_analysis(&at_limit), at_limit);
    }

    #[test]
    fn prompt_names_language_and_ends_with_code() {
        let prompt = AnalysisPrompt::build(Language::Cpp, "int main() { return 0; }");

        assert!(prompt
            .as_str()
            .contains("Analyze the following C++ code and provide:"));
        assert!(prompt.as_str().contains("\"function_name\": \"process_data\""));
        assert!(prompt
            .as_str()
            .ends_with("        Code:\n        int main() { return 0; }"));
        assert!(prompt
            .as_str()
            .starts_with("\n        You are an expert software engineer.\n"));
    }

    #[test]
    fn prompt_embeds_truncated_code() {
        let prompt = AnalysisPrompt::build(Language::Python, &"x".repeat(4500));

        assert!(prompt.as_str().ends_with(TRUNCATION_MARKER));
        assert!(!prompt.as_str().contains(&"x".repeat(4001)));
    }
}
