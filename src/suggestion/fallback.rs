//! Canned suggestion used whenever the generative model cannot answer.
//!
//! Output depends only on the inputs: no clock, no randomness.

pub const UNAVAILABLE_MARKER: &str = "AI сервіс тимчасово недоступний";

struct CannedRecipe {
    title: &'static str,
    prep_time: &'static str,
    difficulty: &'static str,
    steps: &'static [&'static str],
}

const CANNED_RECIPES: [CannedRecipe; 3] = [
    CannedRecipe {
        title: "Свіжий салат",
        prep_time: "15 хвилин",
        difficulty: "легко",
        steps: &[
            "Помийте та наріжте овочі",
            "Змішайте інгредієнти у великій мисці",
            "Заправте олією, сіллю та перцем за смаком",
            "Подавайте одразу",
        ],
    },
    CannedRecipe {
        title: "Стір-фрай",
        prep_time: "20 хвилин",
        difficulty: "середньо",
        steps: &[
            "Наріжте інгредієнти тонкими смужками",
            "Розігрійте сковороду з олією на сильному вогні",
            "Обсмажуйте інгредієнти 5-7 хвилин, постійно помішуючи",
            "Додайте соєвий соус і спеції, готуйте ще 2 хвилини",
        ],
    },
    CannedRecipe {
        title: "Домашній суп",
        prep_time: "40 хвилин",
        difficulty: "легко",
        steps: &[
            "Доведіть до кипіння 1.5 л води або бульйону",
            "Наріжте інгредієнти кубиками",
            "Додайте інгредієнти до бульйону та варіть 25-30 хвилин",
            "Посоліть, поперчіть і додайте зелень перед подачею",
        ],
    },
];

/// Renders the fallback markdown for the given ingredients and preferences.
///
/// The preferences line is omitted when `preferences` is blank.
pub fn render(ingredients: &[String], preferences: &str) -> String {
    let mut out = String::new();
    out.push_str("# Ідеї рецептів з ваших інгредієнтів\n\n");
    out.push_str(&format!("**Ваші інгредієнти:** {}\n", ingredients.join(", ")));
    let preferences = preferences.trim();
    if !preferences.is_empty() {
        out.push_str(&format!("**Ваші побажання:** {}\n", preferences));
    }
    out.push('\n');

    for (index, recipe) in CANNED_RECIPES.iter().enumerate() {
        out.push_str(&format!("## {}. {}\n\n", index + 1, recipe.title));
        out.push_str(&format!("**Час приготування:** {}\n", recipe.prep_time));
        out.push_str(&format!("**Складність:** {}\n\n", recipe.difficulty));
        for (step, text) in recipe.steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", step + 1, text));
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str(&format!(
        "*Примітка: {}. Це загальні рекомендації, спробуйте пізніше для персоналізованого рецепту.*\n",
        UNAVAILABLE_MARKER
    ));
    out
}
