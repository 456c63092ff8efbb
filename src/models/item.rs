use clap::ValueEnum;
use serde::Serialize;

/// The two items an attendee can pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Item {
    Egg,
    Banana,
}

impl Item {
    /// `(egg, banana)` flags for a fresh record: exactly one is true.
    pub fn flags(&self) -> (bool, bool) {
        match self {
            Item::Egg => (true, false),
            Item::Banana => (false, true),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Item::Egg => "Egg",
            Item::Banana => "Banana",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Item::Egg => "🥚",
            Item::Banana => "🍌",
        }
    }

    /// Helper: convert user input (name or menu number)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "e" | "egg" => Some(Item::Egg),
            "2" | "b" | "banana" => Some(Item::Banana),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_set_exactly_one_item() {
        assert_eq!(Item::Egg.flags(), (true, false));
        assert_eq!(Item::Banana.flags(), (false, true));
    }

    #[test]
    fn from_input_accepts_names_and_menu_numbers() {
        assert_eq!(Item::from_input(" Egg "), Some(Item::Egg));
        assert_eq!(Item::from_input("2"), Some(Item::Banana));
        assert_eq!(Item::from_input("b"), Some(Item::Banana));
        assert_eq!(Item::from_input("apple"), None);
    }
}
