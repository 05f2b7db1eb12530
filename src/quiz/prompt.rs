//! Instruction templates for the chat-completion provider.
//!
//! Four fixed templates, {Korean, English} x {multiple-choice, free-form}.
//! The caller-supplied question count and question type are embedded
//! verbatim; the requested output grammar is advisory only.

/// Selects the instruction template for the requested language and
/// question type.
pub fn build_prompt(language: &str, question_type: &str, question_count: u32) -> String {
    match (language, question_type) {
        ("ko", "multiple-choice") => format!(
            "다음 텍스트를 기반으로 {question_count}개의 객관식 문제를 생성해줘. \
             각 문제는 번호로 구분하고, 문제와 4개의 선택지를 명확히 구분해줘. \
             형식은 다음과 같아야 해: \
             \"문제 {{번호}}: {{문제 내용}}\n1. {{선택지1}}\n2. {{선택지2}}\n3. {{선택지3}}\n4. {{선택지4}}\n(답: {{정답}})\""
        ),
        ("ko", _) => format!(
            "다음 텍스트를 기반으로 {question_count}개의 {question_type} 문제를 생성해줘. \
             각 문제는 번호로 구분하고, 문제와 답을 명확히 구분해줘. \
             형식은 다음과 같아야 해: \"문제 {{번호}}: {{문제 내용}} (답: {{정답}})\""
        ),
        (_, "multiple-choice") => format!(
            "Based on the following text, generate {question_count} multiple-choice questions. \
             Each question should be numbered and clearly separate the question and 4 options. \
             The format should be: \
             \"Question {{number}}: {{question content}}\n1. {{option1}}\n2. {{option2}}\n3. {{option3}}\n4. {{option4}}\n(Answer: {{answer}})\""
        ),
        _ => format!(
            "Based on the following text, generate {question_count} {question_type} questions. \
             Each question should be numbered and clearly separate the question and answer. \
             The format should be: \"Question {{number}}: {{question content}} (Answer: {{answer}})\""
        ),
    }
}
