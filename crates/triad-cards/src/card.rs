/// One of the 81 cards.
///
/// Invariant:
/// - `id` is the base-3 packing of the four attributes:
///   `id = ((fill_id * 3 + shape_id) * 3 + amount_id) * 3 + color_id`
/// - every attribute is in `0..=2`.
///
/// Cards are immutable values; they are produced by [`Card::from_id`] and
/// never mutated afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub id: u8,
    pub color_id: u8,
    /// Number of glyphs minus one (0 → one glyph, 2 → three glyphs).
    pub amount_id: u8,
    pub shape_id: u8,
    pub fill_id: u8,
}

/// Number of distinct cards (3^4 attribute combinations).
pub const DECK_SIZE: u8 = 81;

impl Card {
    /// Decodes a card id (`0..81`) into its four attributes.
    ///
    /// Base-3 digit extraction, least-significant digit first: color,
    /// amount, shape, fill. Out-of-range ids are a caller contract
    /// violation; no validation is performed.
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < DECK_SIZE, "card id {id} out of range");
        let color_id = id % 3;
        let rest = id / 3;
        let amount_id = rest % 3;
        let rest = rest / 3;
        let shape_id = rest % 3;
        let fill_id = rest / 3;

        Self { id, color_id, amount_id, shape_id, fill_id }
    }
}

/// Packs four attribute values back into a card id.
#[inline]
pub fn card_id(color_id: u8, amount_id: u8, shape_id: u8, fill_id: u8) -> u8 {
    let mut id = fill_id;
    id = 3 * id + shape_id;
    id = 3 * id + amount_id;
    id = 3 * id + color_id;
    id
}

/// The attribute value completing a triad: equal inputs complete with the
/// same value, distinct inputs with the remaining third value.
#[inline]
pub fn third_attribute(a: u8, b: u8) -> u8 {
    if a == b { a } else { 3 - a - b }
}

/// Id of the unique card that completes a valid triad with the given two.
///
/// Applies [`third_attribute`] independently per attribute. Well-defined
/// even for identical inputs (returns `card1.id`); callers drawing from a
/// table are responsible for picking distinct slots.
pub fn third_card(card1: &Card, card2: &Card) -> u8 {
    let color_id = third_attribute(card1.color_id, card2.color_id);
    let amount_id = third_attribute(card1.amount_id, card2.amount_id);
    let shape_id = third_attribute(card1.shape_id, card2.shape_id);
    let fill_id = third_attribute(card1.fill_id, card2.fill_id);
    card_id(color_id, amount_id, shape_id, fill_id)
}

/// Whether the three cards form a valid triad: per attribute, all three
/// values identical or all three pairwise distinct.
pub fn is_match(card1: &Card, card2: &Card, card3: &Card) -> bool {
    third_card(card1, card2) == card3.id
}
