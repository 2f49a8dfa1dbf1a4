/// All game entity types — pure data, no logic.

/// A discrete one-cell move, delivered by the input layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle.  Stored on an entity as offsets relative to the
/// sprite's top-left corner; `compute::world_bounds` shifts it to world
/// coordinates on every query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// The fields every drawable, collidable thing shares: continuous world
/// position, a symbolic sprite key (resolved by the display layer), and the
/// sprite-local bounding box.  Enemy and Player embed this by composition.
#[derive(Clone, Debug)]
pub struct EntityBody {
    pub x: f32,
    pub y: f32,
    pub sprite: &'static str,
    pub bounds: BoundingBox,
}

/// A bug sweeping left-to-right along one of the road rows.  Tracks only
/// its continuous x after spawn; the row it runs on is implicit in `y`.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub body: EntityBody,
    /// Pixels advanced per frame are 3 × speed.  Re-randomized on wrap.
    pub speed: u32,
}

/// The user-controlled token.  `row`/`col` mirror the grid cell and are
/// kept in sync with the pixel position on every move.
#[derive(Clone, Debug)]
pub struct Player {
    pub body: EntityBody,
    pub row: i32,
    pub col: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session: all live enemies plus the single player.  Cloneable
/// so pure update functions can return a new copy without mutating the
/// original; `compute::restart` replaces the whole thing.
#[derive(Clone, Debug)]
pub struct World {
    pub enemies: Vec<Enemy>,
    pub player: Player,
}
