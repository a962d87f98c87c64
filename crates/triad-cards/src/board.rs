use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{is_match, third_card, Card, DECK_SIZE};

/// Number of table slots dealt face-up.
pub const TABLE_SLOTS: usize = 12;

/// Penalty lockout applied to a player after a wrong pick (ms).
///
/// Consumed by the game layer on top of this crate; defined here so the
/// rule constant lives next to the rules.
pub const TIMEOUT_MS: i32 = 10_000;

/// Every card in id order.
pub fn full_deck() -> Vec<Card> {
    (0..DECK_SIZE).map(Card::from_id).collect()
}

/// Every card, shuffled with the caller's RNG.
///
/// The RNG is a parameter so games can stay reproducible under a seeded
/// generator.
pub fn shuffled_deck(rng: &mut impl Rng) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// A dealt table: the face-down deck plus [`TABLE_SLOTS`] face-up slots.
///
/// Slots are `None` after their card is taken and are refilled from the
/// deck by [`refill`](Board::refill). `game_over` becomes true once the
/// deck is exhausted and no valid triad remains on the table.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub deck: Vec<Card>,
    pub slots: Vec<Option<Card>>,
    pub game_over: bool,
}

impl Board {
    /// Shuffles a fresh deck and deals the opening table.
    ///
    /// The opening table is guaranteed to contain at least one valid triad
    /// (see [`refill`](Board::refill)).
    pub fn deal(rng: &mut impl Rng) -> Self {
        let mut board = Board {
            deck: shuffled_deck(rng),
            slots: vec![None; TABLE_SLOTS],
            game_over: false,
        };
        board.refill(rng);
        board
    }

    /// Fills empty slots from the deck.
    ///
    /// While the deck still has spare cards, the refilled table is forced
    /// to contain a triad: if none exists, one freshly dealt card is
    /// overwritten with the completion of two random other slots. The
    /// overwritten card leaves play, and the forced card is pulled out of
    /// the deck if it was still there. Once the deck runs out, whatever is
    /// left is dealt and `game_over` is set when no triad remains.
    pub fn refill(&mut self, rng: &mut impl Rng) {
        let missing: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
            .collect();

        if missing.is_empty() {
            return;
        }

        if self.deck.len() <= missing.len() {
            for slot in self.slots.iter_mut() {
                if slot.is_none() {
                    *slot = self.deck.pop();
                }
            }
            self.game_over = !self.has_set();
            return;
        }

        // A fresh slot that may be overwritten to force a triad.
        let replace_index = missing[rng.gen_range(0..missing.len())];

        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                *slot = self.deck.pop();
            }
        }

        if self.has_set() {
            return;
        }

        // Pick two distinct slots other than replace_index.
        let n = self.slots.len();
        let mut index1 = rng.gen_range(0..n - 1);
        if index1 >= replace_index {
            index1 += 1;
        }
        let mut index2 = rng.gen_range(0..n - 2);
        if index2 >= replace_index.min(index1) {
            index2 += 1;
        }
        if index2 >= replace_index.max(index1) {
            index2 += 1;
        }

        let (Some(card1), Some(card2)) = (self.slots[index1], self.slots[index2]) else {
            return;
        };
        let forced_id = third_card(&card1, &card2);
        self.slots[replace_index] = Some(Card::from_id(forced_id));

        if let Some(pos) = self.deck.iter().position(|card| card.id == forced_id) {
            self.deck.remove(pos);
        }
    }

    /// Whether any three table cards form a valid triad.
    pub fn has_set(&self) -> bool {
        let ids: HashSet<u8> = self.slots.iter().flatten().map(|card| card.id).collect();

        for (i, card_i) in self.slots.iter().enumerate() {
            let Some(card_i) = card_i else { continue };
            for card_j in self.slots.iter().skip(i + 1).flatten() {
                if ids.contains(&third_card(card_i, card_j)) {
                    return true;
                }
            }
        }

        false
    }

    /// Slot indices of one valid triad, if any exists.
    pub fn find_set(&self) -> Option<[usize; 3]> {
        for i in 0..self.slots.len() {
            let Some(card_i) = self.slots[i] else { continue };
            for j in (i + 1)..self.slots.len() {
                let Some(card_j) = self.slots[j] else { continue };
                let want = third_card(&card_i, &card_j);
                for k in 0..self.slots.len() {
                    if k == i || k == j {
                        continue;
                    }
                    if self.slots[k].is_some_and(|card| card.id == want) {
                        return Some([i, j, k]);
                    }
                }
            }
        }
        None
    }

    /// Validates a pick of three distinct slots; on a valid triad the
    /// slots are emptied and `true` is returned. The table is left
    /// untouched on a wrong pick.
    pub fn take_set(&mut self, indices: [usize; 3]) -> bool {
        let [a, b, c] = indices;
        if a == b || a == c || b == c {
            return false;
        }
        let (Some(card_a), Some(card_b), Some(card_c)) =
            (self.slots.get(a).copied().flatten(),
             self.slots.get(b).copied().flatten(),
             self.slots.get(c).copied().flatten())
        else {
            return false;
        };

        if !is_match(&card_a, &card_b, &card_c) {
            return false;
        }

        self.slots[a] = None;
        self.slots[b] = None;
        self.slots[c] = None;
        true
    }
}
