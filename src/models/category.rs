//! Expense category catalog
//!
//! A fixed set of known categories with display names and icons. Expense
//! records store their category as free-form text; the catalog is used only
//! to resolve that text for display, never to reject input.

use std::fmt;

/// A known expense category with a display icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Bills,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
    Housing,
    Savings,
    Personal,
    Other,
}

impl ExpenseCategory {
    /// All categories in declaration order (stable; used for selection lists)
    pub const ALL: [ExpenseCategory; 11] = [
        Self::Food,
        Self::Transport,
        Self::Bills,
        Self::Entertainment,
        Self::Shopping,
        Self::Healthcare,
        Self::Education,
        Self::Housing,
        Self::Savings,
        Self::Personal,
        Self::Other,
    ];

    /// The display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Housing => "Housing",
            Self::Savings => "Savings",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }

    /// The icon glyph
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚗",
            Self::Bills => "💡",
            Self::Entertainment => "🎬",
            Self::Shopping => "🛍️",
            Self::Healthcare => "⚕️",
            Self::Education => "📚",
            Self::Housing => "🏠",
            Self::Savings => "💰",
            Self::Personal => "👤",
            Self::Other => "📦",
        }
    }

    /// Icon-prefixed display label ("🍔 Food")
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.name())
    }

    /// Resolve a free-form category string (case-insensitive)
    ///
    /// Blank or unrecognized input maps to `Other`.
    pub fn resolve(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return Self::Other;
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Other)
    }

    /// All display labels in declaration order
    pub fn all_labels() -> Vec<String> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }

    /// Recover a bare category name from an icon-prefixed label
    ///
    /// Strips everything that is not a letter or space, then trims. An empty
    /// result maps to "Other".
    pub fn name_from_label(label: &str) -> String {
        let cleaned: String = label
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
            .collect();
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            "Other".to_string()
        } else {
            cleaned.to_string()
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_case_insensitive() {
        assert_eq!(ExpenseCategory::resolve("food"), ExpenseCategory::Food);
        assert_eq!(ExpenseCategory::resolve("FOOD"), ExpenseCategory::Food);
        assert_eq!(
            ExpenseCategory::resolve("  Transport  "),
            ExpenseCategory::Transport
        );
    }

    #[test]
    fn test_resolve_unknown_maps_to_other() {
        assert_eq!(ExpenseCategory::resolve("Gadgets"), ExpenseCategory::Other);
        assert_eq!(ExpenseCategory::resolve(""), ExpenseCategory::Other);
        assert_eq!(ExpenseCategory::resolve("   "), ExpenseCategory::Other);
    }

    #[test]
    fn test_labels_in_declaration_order() {
        let labels = ExpenseCategory::all_labels();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[0], "🍔 Food");
        assert_eq!(labels[10], "📦 Other");
    }

    #[test]
    fn test_name_from_label() {
        assert_eq!(ExpenseCategory::name_from_label("🍔 Food"), "Food");
        assert_eq!(ExpenseCategory::name_from_label("💡 Bills"), "Bills");
        assert_eq!(ExpenseCategory::name_from_label("🎉"), "Other");
        assert_eq!(ExpenseCategory::name_from_label(""), "Other");
    }

    #[test]
    fn test_display() {
        assert_eq!(ExpenseCategory::Healthcare.to_string(), "Healthcare");
    }
}
