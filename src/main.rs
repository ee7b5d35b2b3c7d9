use macroquad::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

use life_viewer::application::{PointSetEditor, SequencePlayer, SessionPhase, SessionStateMachine};
use life_viewer::config::ViewerConfig;
use life_viewer::domain::SnapshotSequence;
use life_viewer::gateway::{self, PendingFetch};
use life_viewer::{input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life - Viewer".to_owned(),
        window_width: 460,
        window_height: 320,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ViewerConfig::load();
    let mut session = SessionStateMachine::new();
    let mut size_field = ui::TextField::new(ui::MARGIN, 90.0, 180.0, "Enter board size:");
    let mut provide_initial_state: Option<bool> = None;
    let mut editor: Option<PointSetEditor> = None;
    let mut player: Option<SequencePlayer> = None;
    let mut pending: Option<PendingFetch> = None;
    let mut banner: Option<String> = None;

    loop {
        clear_background(WHITE);
        let mouse_pos = mouse_position();
        let origin = ui::board_origin();
        let board_px = session.board_size().unwrap_or(0) as f32 * config.cell_size;

        match session.phase() {
            SessionPhase::SizeUnset => {
                rendering::draw_heading("John Conway's Game of Life");
                draw_text(
                    "Provide initial board state?",
                    ui::MARGIN,
                    140.0,
                    18.0,
                    DARKGRAY,
                );

                let buttons = ui::size_form_buttons(provide_initial_state);
                if buttons[0].is_clicked(mouse_pos) {
                    provide_initial_state = Some(true);
                }
                if buttons[1].is_clicked(mouse_pos) {
                    provide_initial_state = Some(false);
                }

                let submitted = size_field.handle_input() || buttons[2].is_clicked(mouse_pos);
                if submitted {
                    match session.submit_size(size_field.value(), provide_initial_state) {
                        Ok(()) => {
                            banner = None;
                            if let Some(size) = session.board_size() {
                                let px = size as f32 * config.cell_size;
                                let (w, h) = ui::window_size_for(px);
                                request_new_screen_size(w, h);
                                if session.provides_initial_state() {
                                    editor = Some(PointSetEditor::new(size, config.cell_size));
                                }
                            }
                        }
                        Err(err) => banner = Some(err.to_string()),
                    }
                }

                size_field.draw();
                for button in &buttons {
                    button.draw(mouse_pos);
                }
            }

            SessionPhase::AwaitingInitialPoints => {
                if let (Some(editor_ref), Some(size)) = (editor.as_mut(), session.board_size()) {
                    input::handle_editor_click(editor_ref, origin, mouse_pos);

                    rendering::draw_heading("Click cells to set the initial state");
                    rendering::draw_editing_board(
                        origin,
                        size,
                        config.cell_size,
                        editor_ref.points(),
                    );
                    let status = match editor_ref.count() {
                        0 => "No points selected yet.".to_owned(),
                        n => format!("You have selected {n} point(s)."),
                    };
                    rendering::draw_status(&status, origin, board_px, DARKGRAY);

                    let buttons = ui::editor_buttons(board_px);
                    if buttons[0].is_clicked(mouse_pos) {
                        session.submit_initial_state();
                    }
                    for button in &buttons {
                        button.draw(mouse_pos);
                    }
                }
            }

            SessionPhase::AwaitingSubmission => {
                if pending.is_none()
                    && let Some(size) = session.board_size()
                {
                    let initial = editor.as_ref().map(|e| e.points());
                    pending = Some(gateway::request_generations(
                        &config.gateway_url,
                        size,
                        initial,
                    ));
                }

                rendering::draw_heading("Requesting generations...");
                rendering::draw_grid_lines(
                    origin,
                    session.board_size().unwrap_or(0),
                    config.cell_size,
                );

                if let Some(result) = pending.as_mut().and_then(PendingFetch::poll) {
                    let sequence = match result {
                        Ok(sequence) => sequence,
                        Err(err) => {
                            error!(%err, "gateway request failed");
                            banner = Some(format!("Simulator error: {err}"));
                            SnapshotSequence::empty()
                        }
                    };
                    player = Some(SequencePlayer::new(sequence, config.autocycle_period_ms));
                    pending = None;
                    session.begin_playback();
                }
            }

            SessionPhase::Playing => {
                if let (Some(player_ref), Some(size)) = (player.as_mut(), session.board_size()) {
                    player_ref.tick(get_frame_time());

                    let buttons = ui::playback_buttons(board_px, player_ref.auto_cycle());
                    input::process_playback_buttons(player_ref, &buttons, mouse_pos);
                    input::process_playback_keys(player_ref);

                    rendering::draw_heading("John Conway's Game of Life");
                    rendering::draw_playback_board(
                        origin,
                        size,
                        config.cell_size,
                        player_ref.current_snapshot(),
                    );

                    let status = if player_ref.is_empty() {
                        "No generations to play.".to_owned()
                    } else {
                        format!(
                            "Generation {} / {}",
                            player_ref.current_index() + 1,
                            player_ref.len()
                        )
                    };
                    rendering::draw_status(&status, origin, board_px, DARKGRAY);
                    for button in &buttons {
                        button.draw(mouse_pos);
                    }
                }
            }
        }

        if let Some(message) = &banner {
            draw_text(message, ui::MARGIN, screen_height() - 12.0, 18.0, RED);
        }

        next_frame().await;
    }
}
