//! Renders the full deck and a dealt table to PNG files.
//!
//! `deck.png` shows all 81 cards in id order; `board.png` shows a freshly
//! dealt table with one valid triad highlighted.

use anyhow::{Context, Result};
use triad_cards::{Board, Card, DECK_SIZE};
use triad_draw::{draw_card, CardOutline};
use triad_engine::coords::Vec2;
use triad_engine::logging::{init_logging, LoggingConfig};
use triad_engine::paint::Color;
use triad_engine::render::{render, Pixmap};
use triad_engine::scene::DrawList;

const CELL: f32 = 110.0;
const CARD_RADIUS: f32 = 48.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    save_deck_sheet("deck.png")?;
    save_board_sheet("board.png")?;

    Ok(())
}

/// All 81 cards, 9 per row, in id order.
fn save_deck_sheet(path: &str) -> Result<()> {
    let cols = 9usize;
    let rows = (DECK_SIZE as usize).div_ceil(cols);

    let mut list = DrawList::new();
    for id in 0..DECK_SIZE {
        let (col, row) = (id as usize % cols, id as usize / cols);
        draw_card(
            &mut list,
            cell_center(col, row),
            &Card::from_id(id),
            0.0,
            CARD_RADIUS,
            CardOutline::Normal,
        );
    }

    save_sheet(path, &list, cols, rows)
}

/// A dealt 4×3 table; the first findable triad is outlined as correct.
fn save_board_sheet(path: &str) -> Result<()> {
    let board = Board::deal(&mut rand::thread_rng());
    let picked = board.find_set();
    log::info!("dealt table, highlighted set at slots {picked:?}");

    let cols = 4usize;
    let rows = board.slots.len().div_ceil(cols);

    let mut list = DrawList::new();
    for (i, slot) in board.slots.iter().enumerate() {
        let Some(card) = slot else { continue };
        let outline = if picked.is_some_and(|set| set.contains(&i)) {
            CardOutline::Correct
        } else {
            CardOutline::Normal
        };
        // A slight per-slot tilt, as the game board lays cards.
        let angle = (i as f32 - 5.5) * 0.05;
        draw_card(&mut list, cell_center(i % cols, i / cols), card, angle, CARD_RADIUS, outline);
    }

    save_sheet(path, &list, cols, rows)
}

fn cell_center(col: usize, row: usize) -> Vec2 {
    Vec2::new(
        (col as f32 + 0.5) * CELL,
        (row as f32 + 0.5) * CELL,
    )
}

fn save_sheet(path: &str, list: &DrawList, cols: usize, rows: usize) -> Result<()> {
    let width = cols * CELL as usize;
    let height = rows * CELL as usize;

    let mut pixmap = Pixmap::new(width, height, Color::white());
    render(list, &mut pixmap);

    image::save_buffer(
        path,
        &pixmap.to_rgba8(),
        width as u32,
        height as u32,
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("writing {path}"))?;

    log::info!("wrote {path} ({width}×{height})");
    Ok(())
}
