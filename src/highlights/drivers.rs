use anyhow::Result;
use regex::Regex;

/// A recognition rule for one driver
///
/// The pattern is an alternation of the forms a commentator uses (surname
/// first, then given name). The matched alternative, capitalized on its
/// first letter, becomes the display name.
#[derive(Debug, Clone)]
struct DriverRule {
    pattern: Regex,
}

/// Recognizes driver names mentioned in commentary text
#[derive(Debug, Clone)]
pub struct DriverRecognizer {
    /// Rules in fixed grid order; each contributes at most one name
    rules: Vec<DriverRule>,
}

impl DriverRecognizer {
    /// Build the recognizer with the default driver grid
    pub fn new() -> Result<Self> {
        let patterns = [
            "verstappen|max",
            "hamilton|lewis",
            "leclerc|charles",
            "norris|lando",
            "russell|george",
            "sainz|carlos",
            "perez|sergio|checo",
            "alonso|fernando",
            "piastri|oscar",
            "gasly|pierre",
            "ocon|esteban",
            "stroll|lance",
            "tsunoda|yuki",
            "albon|alex",
            "bottas|valtteri",
            "hulkenberg|nico",
            "magnussen|kevin",
            "zhou|guanyu",
            "ricciardo|daniel",
            "sargeant|logan",
        ];

        let mut rules = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            rules.push(DriverRule {
                pattern: Regex::new(pattern)?,
            });
        }

        Ok(Self { rules })
    }

    /// Extract driver names mentioned in a text fragment
    ///
    /// Returns display names in rule order with case-insensitive duplicates
    /// suppressed. Never fails; unrecognized text yields an empty list.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut names: Vec<String> = Vec::new();

        for rule in &self.rules {
            if let Some(matched) = rule.pattern.find(&lowered) {
                let display = capitalize_first(matched.as_str());
                if !names.iter().any(|n| n.eq_ignore_ascii_case(&display)) {
                    names.push(display);
                }
            }
        }

        names
    }
}

/// Upper-case the first letter of a matched (lower-cased) name form
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
