//! Exact conversion and display helpers for explorer amounts.
//!
//! Lamport and micro-unit balances are converted without dividing large
//! integers in floating point; see [`decimal::FixedDecimal`]. The remaining
//! modules cover the small formatting jobs an explorer page needs: number
//! abbreviation, label casing and slot-duration humanizing.

pub mod abbreviate;
pub mod amount;
pub mod case;
pub mod config;
pub mod constants;
pub mod decimal;
pub mod duration;
pub mod error;

pub use {
    abbreviate::{AbbreviatedNumber, abbreviate_number},
    amount::{
        AmountFormatter, BaseUnits, Sol, lamports_to_sol, lamports_to_sol_string, micro_to_whole,
        micro_to_whole_string, parse_whole_units, real_number_string, real_number_string_trimmed,
        sol_to_lamports, to_whole_units, token_amount_to_ui,
    },
    case::{camel_to_title_case, capitalize_first, snake_to_pascal, snake_to_title_case},
    config::FormatterConfig,
    decimal::FixedDecimal,
    duration::{
        DurationHumanizer, SlotClock, default_humanizer, humanize_slot_duration, humanize_slots,
    },
    error::{FormatError, FormatResult},
};
