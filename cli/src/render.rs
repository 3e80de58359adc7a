use sweep_core::{GameSession, Glyph, Grid, HazardPlacer, SessionState};

pub fn glyph_char(glyph: Glyph) -> char {
    match glyph {
        Glyph::Hidden => '#',
        Glyph::Flag => 'F',
        Glyph::Question => '?',
        Glyph::Empty => '.',
        Glyph::Number(count) => char::from_digit(count.into(), 10).unwrap_or('+'),
        Glyph::Hazard => '*',
        Glyph::FlaggedHazard => 'F',
        Glyph::Exploded => '@',
        Glyph::MisplacedFlag => 'x',
    }
}

/// One text line per grid row.
pub fn render_grid(grid: &Grid, game_over: bool) -> String {
    let mut out = String::new();
    for row in 0..grid.height() {
        let line: Vec<String> = grid
            .row(row)
            .map(|cell| glyph_char(cell.glyph(game_over)).to_string())
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

pub fn render_status<P: HazardPlacer>(session: &GameSession<P>) -> String {
    let score = session.score();
    let state = match session.state() {
        SessionState::NotStarted => "ready",
        SessionState::InProgress => "playing",
        SessionState::Won => "won",
        SessionState::Lost => "lost",
    };

    format!(
        "{state}, {} revealed, {} hazards marked, {} left",
        score.revealed,
        score.marked,
        session.hazards_left()
    )
}
