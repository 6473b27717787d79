use crate::domain::Action;

/// Sentence the model must use when the document does not answer a question.
pub const QA_FALLBACK_ANSWER: &str =
    "The answer to that question could not be found in the provided document.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub structured_output: bool,
}

/// Builds the prompt for `action`. `user_input` is the question for
/// [`Action::Qa`] and the clause for [`Action::Compare`]; analysis ignores it.
pub fn build_prompt(action: Action, document_text: &str, user_input: Option<&str>) -> Prompt {
    let user_input = user_input.unwrap_or_default();

    let text = match action {
        Action::Analyze => analyze_prompt(document_text),
        Action::Qa => qa_prompt(document_text, user_input),
        Action::Compare => compare_prompt(user_input),
    };

    Prompt {
        text,
        structured_output: action.requires_structured_output(),
    }
}

pub fn analyze_prompt(document_text: &str) -> String {
    format!(
        r#"You are an AI legal and financial analyst with expertise in Indian law. Conduct a rigorous analysis of the following legal document and return a single, clean JSON object with exactly these keys: "keyIssues", "loopholes", "legalCitations", "simplifiedText" and "financialSummary". Do not add any other keys.
1. **financialSummary**: Analyze every financial clause (rent, deposit, maintenance, escalation). Calculate the total rent for the first year, the total rent over the entire term including escalation, and the security deposit as a multiple of the monthly rent. Format as an HTML unordered list (`<ul>`).
2. **keyIssues**: Identify the 5-7 most critical clauses, obligations and financial commitments. Format as an HTML unordered list (`<ul>`).
3. **loopholes**: Look for ambiguous language, potential loopholes and unfavorable terms, and explain the possible negative outcome of each. Format as an HTML unordered list (`<ul>`).
4. **legalCitations**: Cite the relevant sections of Indian law (e.g. "Section 17 of The Indian Contract Act, 1872") and explain why each applies. Format as an HTML unordered list (`<ul>`).
5. **simplifiedText**: Rewrite the entire document in simple, plain English. Plain prose only, no HTML.
Here is the document text:
---
{document_text}
---
"#
    )
}

pub fn qa_prompt(document_text: &str, question: &str) -> String {
    format!(
        r#"Based *only* on the provided legal document text, answer the user's question concisely. If the answer is not in the document, state: "{QA_FALLBACK_ANSWER}"
DOCUMENT TEXT:---{document_text}---
USER'S QUESTION: "{question}"
ANSWER:"#
    )
}

pub fn compare_prompt(clause_text: &str) -> String {
    format!(
        r#"You are an AI legal expert specializing in Indian contract law. A user has provided this clause: "{clause_text}". Your task is to: 1. Analyze the clause for fairness and risks. 2. Rewrite it as a standard, fair version. 3. Present your answer in HTML. Start with <h3>Analysis:</h3>, then <h3>Suggested Fair Version:</h3> followed by the rewritten clause in a <blockquote>."#
    )
}
