use crate::protocol::ReviewRequest;

const INTRO: &str = "Please review this";

/// Single-turn prompt asking the model to review `request.code` as
/// `request.language`. Both are inserted verbatim.
pub fn build_review_prompt(request: &ReviewRequest) -> String {
    format!(
        "{intro} {language} code:\n\n{code}",
        intro = INTRO,
        language = request.language,
        code = request.code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(code: &str, language: &str) -> ReviewRequest {
        ReviewRequest {
            code: code.to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn prompt_includes_language_and_code() {
        let prompt = build_review_prompt(&request("print('hi')", "Python"));
        assert!(prompt.contains("Python"));
        assert!(prompt.contains("print('hi')"));
    }

    #[test]
    fn prompt_exact_shape() {
        let prompt = build_review_prompt(&request("let x = 1;", "JavaScript"));
        assert_eq!(prompt, "Please review this JavaScript code:\n\nlet x = 1;");
    }

    #[test]
    fn prompt_keeps_multiline_code_intact() {
        let code = "def f():\n    return 1\n";
        let prompt = build_review_prompt(&request(code, "Python"));
        assert!(prompt.ends_with(code));
    }

    #[test]
    fn prompt_forwards_empty_fields_unchanged() {
        assert_eq!(
            build_review_prompt(&request("", "")),
            "Please review this  code:\n\n"
        );
    }
}
