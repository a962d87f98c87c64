//! Card rendering for the triad game.
//!
//! One entry point, [`draw_card`], records a card face onto a
//! `triad_engine` [`DrawList`](triad_engine::scene::DrawList): a circular
//! outline colored by pick state, plus one to three glyphs (circle,
//! triangle, or pentagon) filled solid, left open, or hatched in the
//! card's hue.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`card`] | `draw_card`, `CardOutline`, stroke widths |
//! | [`glyph`] | the closed glyph enumeration and vertex tables |
//! | [`palette`] | the three hues and their shared hatch patterns |

pub mod card;
pub mod glyph;
pub mod palette;

pub use card::{draw_card, CardOutline, GLYPH_STROKE_WIDTH, OUTLINE_WIDTH};
pub use glyph::{Glyph, GLYPH_RADIUS};
