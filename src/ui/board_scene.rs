//! 2048 board rendering.
//!
//! Each tile is drawn as a solid colored block 6 columns wide and 3 rows
//! tall with the value centered, leaving a one-column gutter between tiles.

use super::game_common::{
    create_game_layout, format_number_short, render_game_over_banner, render_info_panel_frame,
    render_quit_status_bar, render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use twenty48::game::{Board, GameState};

const CELL_WIDTH: u16 = 7; // 6 tile columns + gutter
const CELL_HEIGHT: u16 = 3;
const INFO_PANEL_WIDTH: u16 = 22;

const EMPTY_BG: Color = Color::Rgb(205, 193, 180);

/// Render the whole game screen.
pub fn render_board_scene(frame: &mut Frame, area: Rect, state: &GameState, quit_pending: bool) {
    let board_height = state.board.size() as u16 * CELL_HEIGHT;
    let layout = create_game_layout(
        frame,
        area,
        " 2048 ",
        Color::Yellow,
        board_height,
        INFO_PANEL_WIDTH,
    );

    render_board(frame, layout.content, &state.board);

    if state.is_terminal() {
        render_game_over_banner(
            frame,
            layout.content,
            Color::Red,
            "GAME OVER",
            &format!("final score {}", state.score),
        );
    }

    render_status_bar_content(frame, layout.status_bar, state, quit_pending);
    render_info_panel(frame, layout.info_panel, state);
}

/// Background and foreground colors for a tile value.
fn tile_colors(value: u32) -> (Color, Color) {
    match value {
        0 => (EMPTY_BG, Color::Rgb(187, 173, 160)),
        2 => (Color::Rgb(238, 228, 218), Color::Rgb(119, 110, 101)),
        4 => (Color::Rgb(237, 224, 200), Color::Rgb(119, 110, 101)),
        8 => (Color::Rgb(242, 177, 121), Color::White),
        16 => (Color::Rgb(245, 149, 99), Color::White),
        32 => (Color::Rgb(246, 124, 95), Color::White),
        64 => (Color::Rgb(246, 94, 59), Color::White),
        128 => (Color::Rgb(237, 207, 114), Color::White),
        256 => (Color::Rgb(237, 204, 97), Color::White),
        512 => (Color::Rgb(237, 200, 80), Color::White),
        1024 => (Color::Rgb(237, 197, 63), Color::White),
        2048 => (Color::Rgb(237, 194, 46), Color::White),
        _ => (Color::Rgb(60, 58, 50), Color::Rgb(249, 246, 242)),
    }
}

fn tile_label(value: u32) -> String {
    if value == 0 {
        "·".to_string()
    } else {
        value.to_string()
    }
}

fn render_board(frame: &mut Frame, area: Rect, board: &Board) {
    let n = board.size() as u16;
    let board_w = n * CELL_WIDTH;
    let board_h = n * CELL_HEIGHT;

    if area.width < board_w || area.height < board_h {
        let msg = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let x_off = area.x + (area.width - board_w) / 2;
    let y_off = area.y + (area.height - board_h) / 2;

    for (r, row) in board.rows().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            let (bg, fg) = tile_colors(value);
            let cell = Rect::new(
                x_off + c as u16 * CELL_WIDTH,
                y_off + r as u16 * CELL_HEIGHT,
                CELL_WIDTH - 1,
                CELL_HEIGHT,
            );
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    tile_label(value),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            let tile = Paragraph::new(lines)
                .style(Style::default().bg(bg))
                .alignment(Alignment::Center);
            frame.render_widget(tile, cell);
        }
    }
}

fn status_message(state: &GameState) -> (String, Color) {
    if state.is_terminal() {
        ("No moves left".to_string(), Color::Red)
    } else if state.reached_target {
        (
            format!("You made {}! Keep going", state.target_tile),
            Color::Green,
        )
    } else {
        ("Slide tiles to merge them".to_string(), Color::White)
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, state: &GameState, quit_pending: bool) {
    if render_quit_status_bar(frame, area, quit_pending) {
        return;
    }

    let (text, color) = status_message(state);
    render_status_bar(
        frame,
        area,
        &text,
        color,
        &[("[Arrows]", "Move"), ("[R]", "Restart"), ("[Esc]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let inner = render_info_panel_frame(frame, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(format_number_short(state.score), value),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", label),
            Span::styled(format_number_short(state.best_score), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Moves: ", label),
            Span::styled(state.moves.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Max:   ", label),
            Span::styled(
                state.max_tile().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    if state.reached_target {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("★ {} reached", state.target_tile),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use twenty48::game::GameStatus;
    use twenty48::GameConfig;

    #[test]
    fn test_tile_label() {
        assert_eq!(tile_label(0), "·");
        assert_eq!(tile_label(2048), "2048");
        assert_eq!(tile_label(131072), "131072");
    }

    #[test]
    fn test_tile_colors_distinguish_empty() {
        assert_ne!(tile_colors(0).0, tile_colors(2).0);
        assert_ne!(tile_colors(2).0, tile_colors(4).0);
        // Anything past 2048 shares the dark style
        assert_eq!(tile_colors(4096), tile_colors(8192));
    }

    #[test]
    fn test_status_message() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.status = GameStatus::Playing;
        assert_eq!(status_message(&state).1, Color::White);

        state.reached_target = true;
        assert!(status_message(&state).0.contains("2048"));

        state.status = GameStatus::Terminal;
        assert_eq!(status_message(&state).0, "No moves left");
    }

    #[test]
    fn test_render_scene_small_and_large() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        for (w, h) in [(80, 24), (20, 6)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            assert!(terminal
                .draw(|f| render_board_scene(f, f.size(), &state, false))
                .is_ok());
        }
    }
}
