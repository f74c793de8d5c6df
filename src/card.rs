//! City cards.
//!
//! A card starts life as a [`RawCard`] (what the player typed or what a
//! batch file contained). Building a [`Card`] from it computes the derived
//! statistics once; after that the card is read-only.

mod derived;
mod record;
mod validate;

pub use derived::{compute_derived, DerivedStats};
pub use record::{Card, RawCard};
pub use validate::{
    check_area, check_card_code, check_city_name, check_gdp, normalize_state_code, parse_amount,
    parse_count, MAX_CODE_LEN, MAX_NAME_LEN,
};
