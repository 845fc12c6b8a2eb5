/// Deriva el `user_id` a partir del nombre: minúsculas y cada bloque de
/// espacios en blanco reducido a un `_`. Los extremos se recortan antes.
pub fn derive_user_id(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
