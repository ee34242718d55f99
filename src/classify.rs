// src/classify.rs
// =============================================================================
// Guesses what a repository is about from its languages and text.
//
// Six independent rules, evaluated in a fixed order:
// - Two look at the language list ("Python, JavaScript, ...")
// - Four look at "name description readme" as one lowercase blob
// Each rule that matches adds its label. No rule wins over another, so a
// repo can be both "Tools/Utilities" and "Learning/Tutorial".
//
// Matching is plain substring search, so "ai" also matches "main".
// =============================================================================

/// Label used when no rule matches
pub const OTHER: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WebDevelopment,
    MobileDevelopment,
    DataScience,
    ApiBackend,
    ToolsUtilities,
    LearningTutorial,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::WebDevelopment => "Web Development",
            Category::MobileDevelopment => "Mobile Development",
            Category::DataScience => "Data Science/ML",
            Category::ApiBackend => "API/Backend",
            Category::ToolsUtilities => "Tools/Utilities",
            Category::LearningTutorial => "Learning/Tutorial",
        }
    }
}

/// Which input a rule searches
#[derive(Debug, Clone, Copy)]
enum Source {
    Languages,
    Text,
}

struct Rule {
    category: Category,
    source: Source,
    keywords: &'static [&'static str],
}

// Order here is the order labels appear in the output
const RULES: [Rule; 6] = [
    Rule {
        category: Category::WebDevelopment,
        source: Source::Languages,
        keywords: &["javascript", "typescript", "html", "css"],
    },
    Rule {
        category: Category::MobileDevelopment,
        source: Source::Languages,
        keywords: &["swift", "kotlin", "dart"],
    },
    Rule {
        category: Category::DataScience,
        source: Source::Text,
        keywords: &[
            "data",
            "machine learning",
            "ml",
            "ai",
            "analysis",
            "visualization",
            "pandas",
            "numpy",
        ],
    },
    Rule {
        category: Category::ApiBackend,
        source: Source::Text,
        keywords: &["api", "backend", "server", "database", "microservice"],
    },
    Rule {
        category: Category::ToolsUtilities,
        source: Source::Text,
        keywords: &["tool", "utility", "script", "automation", "cli"],
    },
    Rule {
        category: Category::LearningTutorial,
        source: Source::Text,
        keywords: &["tutorial", "learning", "practice", "example", "demo", "course"],
    },
];

// Runs every rule against one repository
//
// Parameters:
//   name, description, readme: searched together as one lowercase text blob
//   languages: comma-joined language names, searched by the language rules
//
// Returns: the matching categories in rule order (possibly none)
pub fn categorize(name: &str, description: &str, readme: &str, languages: &str) -> Vec<Category> {
    let languages = languages.to_lowercase();
    let text = format!("{} {} {}", name, description, readme).to_lowercase();

    RULES
        .iter()
        .filter(|rule| {
            let haystack = match rule.source {
                Source::Languages => &languages,
                Source::Text => &text,
            };
            rule.keywords.iter().any(|keyword| haystack.contains(keyword))
        })
        .map(|rule| rule.category)
        .collect()
}

/// Joins categories with "; ", or returns "Other" for none
pub fn category_label(categories: &[Category]) -> String {
    if categories.is_empty() {
        return OTHER.to_string();
    }

    categories
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, description: &str, readme: &str, languages: &str) -> String {
        category_label(&categorize(name, description, readme, languages))
    }

    #[test]
    fn test_ml_tutorial_demo() {
        assert_eq!(
            label("ml-tutorial-demo", "pandas-based course", "No README found", "Python"),
            "Data Science/ML; Learning/Tutorial"
        );
    }

    #[test]
    fn test_no_match_is_other() {
        assert_eq!(label("zephyr", "", "No README found", "Python"), "Other");
    }

    #[test]
    fn test_language_rules_are_case_insensitive() {
        assert_eq!(label("zephyr", "", "", "TypeScript, CSS"), "Web Development");
        assert_eq!(label("zephyr", "", "", "Kotlin"), "Mobile Development");
    }

    #[test]
    fn test_language_rules_ignore_text() {
        // "css" in the description does not make it a web project
        assert_eq!(label("zephyr", "styled with CSS", "", "Go"), "Other");
    }

    #[test]
    fn test_labels_follow_rule_order() {
        let categories = categorize("rest-server", "tutorial with a cli", "", "Swift, JavaScript");
        assert_eq!(
            categories,
            vec![
                Category::WebDevelopment,
                Category::MobileDevelopment,
                Category::ApiBackend,
                Category::ToolsUtilities,
                Category::LearningTutorial,
            ]
        );
    }

    #[test]
    fn test_readme_contributes_to_text_rules() {
        assert_eq!(label("zephyr", "", "Runs as a background Server", "Go"), "API/Backend");
    }

    #[test]
    fn test_same_inputs_same_labels() {
        let first = label("tool-box", "Automation scripts", "Example usage", "Shell");
        let second = label("tool-box", "Automation scripts", "Example usage", "Shell");
        assert_eq!(first, second);
        assert_eq!(first, "Tools/Utilities; Learning/Tutorial");
    }
}
