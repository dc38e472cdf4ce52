use dungen_types::{Layout, Position, TileGrid};

/// Spawn marker.
pub const SPAWN_GLYPH: char = '@';

/// One text line per `z` row using [`dungen_types::Tile::glyph`].
pub fn render_minimap(layout: &Layout) -> String {
    draw(&layout.grid, Some(layout.spawn), |_| None)
}

/// Like [`render_minimap`], but room floors show their kind's letter.
pub fn render_rooms(layout: &Layout) -> String {
    draw(&layout.grid, Some(layout.spawn), |p| {
        layout.room_at(p).map(|r| r.kind.letter())
    })
}

fn draw(
    grid: &TileGrid,
    spawn: Option<Position>,
    overlay: impl Fn(Position) -> Option<char>,
) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.depth() as usize);
    for z in 0..grid.depth() {
        for x in 0..grid.width() {
            let p = Position::new(x, z);
            let c = if Some(p) == spawn {
                SPAWN_GLYPH
            } else {
                overlay(p).unwrap_or_else(|| grid.get(p).map_or(' ', |t| t.glyph()))
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
