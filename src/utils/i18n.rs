// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;
use crate::config::CONFIG;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Formulario
            translations.insert("upload_photo", "Upload Photo :");
            translations.insert("enter_name", "Enter Your Name:");
            translations.insert("name_placeholder", "Enter your name...");
            translations.insert("next", "Next");
            translations.insert("back", "← Back");
            translations.insert("upload_three", "Upload 3 Images (Left, Middle, Right)");
            translations.insert("delete", "Delete");
            translations.insert("upload_images", "Upload Images");
            translations.insert("name_required", "Please enter your name before proceeding.");
            translations.insert("name_taken", "This name is already taken, please choose another one.");
            translations.insert("check_failed", "Something went wrong while checking the name, please try again later.");
            translations.insert("missing_images", "Please select an image for:");
            translations.insert("upload_failed", "Upload failed. Please try again.");

            // Resultados
            translations.insert("loading_results", "Loading data, please wait...");
            translations.insert("results_title", "Analysis Results for User:");
            translations.insert("upload_time", "Upload Time:");
            translations.insert("severity", "Severity:");
            translations.insert("confidence", "Confidence:");
            translations.insert("results_failed", "Could not load the analysis results, please try again later.");
            translations.insert("back_home", "Back to Home");

            // Consejos
            translations.insert("advice_title", "AI Skincare Advice and References");
            translations.insert("advice_loading", "Generating advice, please wait...");
            translations.insert("advice_failed", "Could not get skincare advice, please try again later.");
            translations.insert("advice_instruction", "Based on the following acne analysis results, provide skincare advice and reference resources:");
        }
        _ => {
            // Formulario
            translations.insert("upload_photo", "上傳照片：");
            translations.insert("enter_name", "請輸入您的名稱：");
            translations.insert("name_placeholder", "輸入您的名稱...");
            translations.insert("next", "下一步");
            translations.insert("back", "← 返回");
            translations.insert("upload_three", "上傳 3 張照片（左、中、右）");
            translations.insert("delete", "刪除");
            translations.insert("upload_images", "上傳照片");
            translations.insert("name_required", "請先輸入您的名稱再繼續。");
            translations.insert("name_taken", "這個名稱已被使用，請換一個名稱。");
            translations.insert("check_failed", "檢查 user_id 時發生錯誤，請稍後再試。");
            translations.insert("missing_images", "請為以下位置選擇照片：");
            translations.insert("upload_failed", "上傳失敗，請再試一次。");

            // Resultados
            translations.insert("loading_results", "資料載入中，請稍候...");
            translations.insert("results_title", "分析結果，使用者：");
            translations.insert("upload_time", "上傳時間：");
            translations.insert("severity", "嚴重程度：");
            translations.insert("confidence", "信心值：");
            translations.insert("results_failed", "無法載入分析結果，請稍後再試。");
            translations.insert("back_home", "回到首頁");

            // Consejos
            translations.insert("advice_title", "AI 衛教建議與參考資料");
            translations.insert("advice_loading", "正在生成建議中，請稍候...");
            translations.insert("advice_failed", "無法取得衛教建議，請稍後再試。");
            translations.insert("advice_instruction", "根據以下痘痘分析結果提供衛教建議和可參考資源：");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("ZH" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

/// Traducción con el idioma configurado en compilación
pub fn tr(key: &str) -> String {
    t(key, CONFIG.language())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_key", "EN"), "no_such_key");
    }

    #[test]
    fn unknown_language_uses_chinese() {
        assert_eq!(t("advice_failed", "FR"), "無法取得衛教建議，請稍後再試。");
    }

    #[test]
    fn language_is_case_insensitive() {
        assert_eq!(t("upload_failed", "en"), "Upload failed. Please try again.");
    }

    #[test]
    fn both_languages_cover_the_same_keys() {
        let en = get_translations("EN");
        let zh = get_translations("ZH");
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut zh_keys: Vec<_> = zh.keys().collect();
        en_keys.sort();
        zh_keys.sort();
        assert_eq!(en_keys, zh_keys);
    }
}
