/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  Sprite keys are resolved to glyph/colour
/// pairs here, standing in for an image resource cache.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use bug_crossing::compute::{COLUMN_WIDTH, NUM_COLS, NUM_ROWS, ROW_HEIGHT, Y_OFFSET};
use bug_crossing::entities::{Enemy, Player, World};

// ── Board layout (terminal cells) ─────────────────────────────────────────────

/// Terminal cells per grid column.  Enemies move in continuous pixels, so a
/// wide cell makes the sub-column motion visible.
const CELL_W: u16 = 10;
/// Terminal rows per grid row.
const CELL_H: u16 = 2;
/// Column of the left border.
const BOARD_LEFT: u16 = 0;
/// Row of the top border.
const BOARD_TOP: u16 = 1;

const BOARD_INNER_W: u16 = CELL_W * NUM_COLS as u16;
const BOARD_INNER_H: u16 = CELL_H * NUM_ROWS as u16;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Cyan;
const C_WATER: Color = Color::Blue;
const C_ROAD: Color = Color::DarkGrey;
const C_GRASS: Color = Color::DarkGreen;
const C_ENEMY: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Sprite lookup ─────────────────────────────────────────────────────────────

/// Resolve a symbolic sprite key to its terminal rendition.  Unknown keys
/// get a visible placeholder rather than a panic.
fn sprite_glyph(key: &str) -> (&'static str, Color) {
    match key {
        "images/enemy-bug.png" => ("oOo>", C_ENEMY),
        "images/char-boy.png" => ("(☺)", C_PLAYER),
        _ => ("?", Color::Magenta),
    }
}

// ── Pixel → terminal mapping ──────────────────────────────────────────────────

/// Terminal column for a world x position.  May fall outside the board for
/// off-screen entities; callers clip.
fn term_col(x: f32) -> i32 {
    BOARD_LEFT as i32 + 1 + (x * CELL_W as f32 / COLUMN_WIDTH).round() as i32
}

/// Terminal row for a world y position: recover the logical grid row and
/// place the glyph on the lower line of its two-line band.
fn term_row(y: f32) -> u16 {
    let row = ((y - Y_OFFSET) / ROW_HEIGHT).round() as u16;
    BOARD_TOP + 1 + row * CELL_H + 1
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_title(out)?;
    draw_board(out)?;

    for enemy in &world.enemies {
        draw_enemy(out, enemy)?;
    }
    draw_player(out, &world.player)?;

    draw_controls_hint(out)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, BOARD_TOP + BOARD_INNER_H + 3))?;
    out.flush()?;
    Ok(())
}

// ── Title (row 0) ─────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W) -> std::io::Result<()> {
    let title = "· BUG CROSSING ·";
    let cx = (BOARD_INNER_W + 2).saturating_sub(title.chars().count() as u16) / 2;
    out.queue(cursor::MoveTo(cx, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;
    Ok(())
}

// ── Board: border + terrain ───────────────────────────────────────────────────

/// Terrain fill for one grid row: water on row 0, road on the enemy lanes,
/// grass at the bottom.
fn terrain(row: i32) -> (char, Color) {
    match row {
        0 => ('~', C_WATER),
        1..=3 => ('·', C_ROAD),
        _ => ('"', C_GRASS),
    }
}

fn draw_board<W: Write>(out: &mut W) -> std::io::Result<()> {
    let w = BOARD_INNER_W as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(BOARD_LEFT, BOARD_TOP))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;
    out.queue(cursor::MoveTo(BOARD_LEFT, BOARD_TOP + BOARD_INNER_H + 1))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 0..NUM_ROWS {
        let (fill, color) = terrain(row);
        let band: String = fill.to_string().repeat(w);
        for line in 0..CELL_H {
            let y = BOARD_TOP + 1 + row as u16 * CELL_H + line;
            out.queue(cursor::MoveTo(BOARD_LEFT, y))?;
            out.queue(style::SetForegroundColor(C_BORDER))?;
            out.queue(Print("│"))?;
            out.queue(style::SetForegroundColor(color))?;
            out.queue(Print(&band))?;
            out.queue(style::SetForegroundColor(C_BORDER))?;
            out.queue(Print("│"))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw an enemy, clipping character-by-character at the borders — wrapping
/// enemies spend a moment partly (or wholly) off the left edge.
fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy) -> std::io::Result<()> {
    let (glyph, color) = sprite_glyph(enemy.body.sprite);
    let row = term_row(enemy.body.y);
    let start = term_col(enemy.body.x);

    out.queue(style::SetForegroundColor(color))?;
    for (i, ch) in glyph.chars().enumerate() {
        let col = start + i as i32;
        let min = BOARD_LEFT as i32 + 1;
        let max = BOARD_LEFT as i32 + BOARD_INNER_W as i32;
        if col < min || col > max {
            continue;
        }
        out.queue(cursor::MoveTo(col as u16, row))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

/// Draw the player centred in its grid cell.
fn draw_player<W: Write>(out: &mut W, player: &Player) -> std::io::Result<()> {
    let (glyph, color) = sprite_glyph(player.body.sprite);
    let width = glyph.chars().count() as u16;
    let col = BOARD_LEFT + 1 + player.col as u16 * CELL_W + (CELL_W - width) / 2;
    let row = term_row(player.body.y);

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint ─────────────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, BOARD_TOP + BOARD_INNER_H + 2))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ → ↓ : Move   Q : Quit   (reach the water, dodge the bugs)"))?;
    Ok(())
}
