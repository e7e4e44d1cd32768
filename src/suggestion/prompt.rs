pub const SYSTEM_INSTRUCTION: &str = "Ти кулінарний помічник. Запропонуй один рецепт, який можна приготувати з наданих інгредієнтів.
Відповідай українською мовою у форматі markdown з такою структурою:
- Назва рецепту (заголовок)
- Короткий опис страви
- Список інгредієнтів з кількістю
- Покрокова інструкція приготування
- Час приготування та рівень складності";

/// User message naming the ingredients and, if given, the preferences.
pub fn user_message(ingredients: &[String], preferences: &str) -> String {
    let mut message = format!("У мене є такі інгредієнти: {}.", ingredients.join(", "));
    let preferences = preferences.trim();
    if !preferences.is_empty() {
        message.push_str(&format!(" Мої побажання: {}.", preferences));
    }
    message
}

/// System instruction and user message joined into the single prompt the model receives.
pub fn combined_prompt(ingredients: &[String], preferences: &str) -> String {
    format!("{}\n\n{}", SYSTEM_INSTRUCTION, user_message(ingredients, preferences))
}
