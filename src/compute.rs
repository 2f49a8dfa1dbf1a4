/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current state
/// (and, where needed, an RNG handle) and returns a brand-new value.  Side
/// effects are limited to the injected RNG, so callers control determinism
/// (useful for tests with a seeded RNG).

use rand::Rng;

use crate::entities::{BoundingBox, Direction, Enemy, EntityBody, Player, World};

// ── Board geometry ────────────────────────────────────────────────────────────

/// Width of one grid column, in pixels.  Columns run 0–4.
pub const COLUMN_WIDTH: f32 = 101.0;
/// Height of one grid row, in pixels.  Rows run 0–5.
pub const ROW_HEIGHT: f32 = 83.0;
/// The sprite art sits a little low in its tile; shifting up by 21 px
/// centres it on its logical row.
pub const Y_OFFSET: f32 = -21.0;
/// Right edge of the track.  An enemy past this point wraps around.
pub const TRACK_RIGHT_EDGE: f32 = 505.0;
/// Off-screen spawn x, one column-width left of column 0.
pub const SPAWN_X: f32 = -COLUMN_WIDTH;

pub const NUM_COLS: i32 = 5;
pub const NUM_ROWS: i32 = 6;

// ── Sprites & bounding boxes ──────────────────────────────────────────────────

const ENEMY_SPRITE: &str = "images/enemy-bug.png";
const PLAYER_SPRITE: &str = "images/char-boy.png";

/// Sprite-local collision boxes.  The sprites carry transparent padding, so
/// the boxes are tighter than the 101 × 171 px images.
const ENEMY_BOUNDS: BoundingBox = BoundingBox { x: 0.0, y: 78.0, w: 99.0, h: 65.0 };
const PLAYER_BOUNDS: BoundingBox = BoundingBox { x: 17.0, y: 65.0, w: 67.0, h: 75.0 };

// ── Grid → pixel mapping ──────────────────────────────────────────────────────

/// X position for a grid column.  Negative columns map to the fixed
/// off-screen spawn point used by wrapping enemies.
pub fn col_to_x(col: i32) -> f32 {
    if col < 0 {
        return SPAWN_X;
    }
    col as f32 * COLUMN_WIDTH
}

/// Y position for a grid row, padding-compensated so the drawn sprite sits
/// centred on its logical row.
pub fn row_to_y(row: i32) -> f32 {
    row as f32 * ROW_HEIGHT + Y_OFFSET
}

// ── Collision ─────────────────────────────────────────────────────────────────

/// The entity's bounding box shifted to its current world position.
/// Recomputed on every call — the position changes every tick, so the
/// world-space box is never cached.
pub fn world_bounds(body: &EntityBody) -> BoundingBox {
    BoundingBox {
        x: body.x + body.bounds.x,
        y: body.y + body.bounds.y,
        w: body.bounds.w,
        h: body.bounds.h,
    }
}

/// Axis-aligned overlap test on the two entities' world-space boxes.
/// Strict comparisons throughout: boxes that exactly touch at an edge do
/// not count as a collision.
pub fn check_collision(a: &EntityBody, b: &EntityBody) -> bool {
    let a = world_bounds(a);
    let b = world_bounds(b);
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build an enemy at a grid seed with a fresh random speed in [1,5].
/// Column −1 is the off-screen spawn point.
pub fn new_enemy(row: i32, col: i32, rng: &mut impl Rng) -> Enemy {
    Enemy {
        body: EntityBody {
            x: col_to_x(col),
            y: row_to_y(row),
            sprite: ENEMY_SPRITE,
            bounds: ENEMY_BOUNDS,
        },
        speed: rng.gen_range(1..=5),
    }
}

/// Build the player at a grid seed.
pub fn new_player(row: i32, col: i32) -> Player {
    Player {
        body: EntityBody {
            x: col_to_x(col),
            y: row_to_y(row),
            sprite: PLAYER_SPRITE,
            bounds: PLAYER_BOUNDS,
        },
        row,
        col,
    }
}

/// Discard the whole session and rebuild the fixed initial configuration:
/// three enemies at grid seeds (1,−1), (2,2), (3,3) and the player at
/// (5,2).  This is the sole place initial / try-again state is defined;
/// game start and every reset go through here.
pub fn restart(rng: &mut impl Rng) -> World {
    World {
        enemies: vec![
            new_enemy(1, -1, rng),
            new_enemy(2, 2, rng),
            new_enemy(3, 3, rng),
        ],
        player: new_player(5, 2),
    }
}

// ── Per-frame updates ─────────────────────────────────────────────────────────

/// Advance one enemy by one frame: 3 × speed pixels to the right.  Past the
/// right edge of the track it wraps to the off-screen spawn point with a
/// new random speed in [1,5] and a new random road row in {1,2,3}.
///
/// `_dt` is part of the driver's update contract but deliberately unused —
/// the original advances a fixed increment per call, so effective speed is
/// frame-rate-dependent.  Kept as-is rather than silently rescaled.
pub fn update_enemy(enemy: &Enemy, _dt: f32, rng: &mut impl Rng) -> Enemy {
    let mut e = enemy.clone();
    e.body.x += 3.0 * e.speed as f32;
    if e.body.x > TRACK_RIGHT_EDGE {
        e.body.x = SPAWN_X;
        e.speed = rng.gen_range(1..=5);
        e.body.y = row_to_y(rng.gen_range(1..=3));
    }
    e
}

/// Advance the player by one frame: test collision against each enemy in
/// order and reset the whole world on the first hit — later enemies in the
/// same tick are not evaluated.  Reaching row 0 (the water) resets the
/// world the same way; a win carries nothing over.
pub fn update_player(world: &World, _dt: f32, rng: &mut impl Rng) -> World {
    for enemy in &world.enemies {
        if check_collision(&world.player.body, &enemy.body) {
            return restart(rng);
        }
    }
    if world.player.row == 0 {
        return restart(rng);
    }
    world.clone()
}

/// Apply one discrete input event: move one grid cell, clamped to the
/// board.  `None` (an unrecognized key upstream) is a no-op, as is pushing
/// against an edge.  The pixel position is recomputed from the grid cell
/// so the two can never drift apart.
pub fn handle_input(player: &Player, dir: Option<Direction>) -> Player {
    let mut p = player.clone();
    match dir {
        Some(Direction::Left) if p.col > 0 => p.col -= 1,
        Some(Direction::Right) if p.col < NUM_COLS - 1 => p.col += 1,
        Some(Direction::Up) if p.row > 0 => p.row -= 1,
        Some(Direction::Down) if p.row < NUM_ROWS - 1 => p.row += 1,
        _ => return p,
    }
    p.body.x = col_to_x(p.col);
    p.body.y = row_to_y(p.row);
    p
}

/// One whole engine frame: every enemy updates, then the player (whose
/// update may replace the world).  The player checks the already-updated
/// enemy positions, matching the driver's update ordering.
pub fn tick(world: &World, dt: f32, rng: &mut impl Rng) -> World {
    let moved = World {
        enemies: world
            .enemies
            .iter()
            .map(|e| update_enemy(e, dt, rng))
            .collect(),
        player: world.player.clone(),
    };
    update_player(&moved, dt, rng)
}
