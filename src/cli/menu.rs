//! Main menu of the interactive session.

use trunfo::{Attribute, Comparison};

/// Menu number for "compare everything".
const ALL_OPTION: u8 = 7;
/// Menu number for the advanced analysis.
const ADVANCED_OPTION: u8 = 8;
/// Menu number for leaving the session.
const QUIT_OPTION: u8 = 0;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuChoice {
    /// Run a comparison.
    Compare(Comparison),
    /// End the session.
    Quit,
}

impl MenuChoice {
    /// Parse a menu line. Returns `None` for anything that is not an option.
    pub(super) fn parse(input: &str) -> Option<Self> {
        let option: u8 = input.trim().parse().ok()?;
        match option {
            QUIT_OPTION => Some(Self::Quit),
            ALL_OPTION => Some(Self::Compare(Comparison::All)),
            ADVANCED_OPTION => Some(Self::Compare(Comparison::Advanced)),
            id => Attribute::from_id(id).map(|a| Self::Compare(Comparison::Single(a))),
        }
    }
}

/// Render the main menu.
pub(super) fn render() -> String {
    let mut menu = String::new();
    menu.push_str("\n====================================\n");
    menu.push_str("             MAIN MENU\n");
    menu.push_str("====================================\n");
    for id in 1..=6 {
        if let Some(attribute) = Attribute::from_id(id) {
            menu.push_str(&format!("{id}. Compare {attribute}\n"));
        }
    }
    menu.push_str(&format!("{ALL_OPTION}. Compare all attributes\n"));
    menu.push_str(&format!("{ADVANCED_OPTION}. Advanced comparison\n"));
    menu.push_str(&format!("{QUIT_OPTION}. Quit\n"));
    menu.push_str("====================================\n");
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attributes() {
        assert_eq!(
            MenuChoice::parse("1"),
            Some(MenuChoice::Compare(Comparison::Single(Attribute::Population)))
        );
        assert_eq!(
            MenuChoice::parse(" 4\n"),
            Some(MenuChoice::Compare(Comparison::Single(Attribute::Density)))
        );
        assert_eq!(
            MenuChoice::parse("6"),
            Some(MenuChoice::Compare(Comparison::Single(Attribute::TouristSpots)))
        );
    }

    #[test]
    fn test_parse_special_options() {
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Compare(Comparison::All)));
        assert_eq!(MenuChoice::parse("8"), Some(MenuChoice::Compare(Comparison::Advanced)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_render_lists_every_option() {
        let menu = render();
        assert!(menu.contains("1. Compare Population"));
        assert!(menu.contains("4. Compare Population density"));
        assert!(menu.contains("8. Advanced comparison"));
        assert!(menu.contains("0. Quit"));
    }
}
