//! Card encoding and the triad matching rule.
//!
//! A card is one of 81 combinations of four attributes (color, amount,
//! shape, fill), each taking three values, packed into a single base-3 id.
//! Three cards form a *triad* when, independently for each attribute, the
//! three values are all identical or all pairwise distinct.
//!
//! This crate is kept near-dependency-free so servers and tooling can use
//! the rules without pulling in any rendering code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`card`] | `Card`, id codec, `third_card`, `is_match` |
//! | [`board`] | deck shuffling, the dealt table, set search |
//!
//! # Quick start
//!
//! ```rust
//! use triad_cards::{third_card, Card};
//!
//! let a = Card::from_id(0);
//! let b = Card::from_id(1);
//! // 0 and 1 differ only in color, so the completion has the third color.
//! assert_eq!(third_card(&a, &b), 2);
//! ```

pub mod board;
pub mod card;

pub use board::{Board, TABLE_SLOTS, TIMEOUT_MS};
pub use card::{card_id, is_match, third_attribute, third_card, Card, DECK_SIZE};
