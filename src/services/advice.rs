use crate::models::AnalysisResult;
use crate::utils::t;

/// Una línea `"<face_part> face: <severity>"` por resultado, separadas por `\n`
pub fn build_prompt(results: &[AnalysisResult]) -> String {
    results
        .iter()
        .map(|r| format!("{} face: {}", r.face_part, r.severity))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mensaje completo para el webhook: instrucción + prompt
pub fn build_message(prompt: &str, lang: &str) -> String {
    format!("{}\n{}", t("advice_instruction", lang), prompt)
}
