//! Fixed timestep simulation tick
//!
//! The single mutation path for snake, food, and score. Direction and pause
//! intents recorded between ticks by the adapters take effect here.

use super::state::{GamePhase, GameState};

/// Advance the game by one discrete step.
///
/// Inert while paused or in a terminal phase; otherwise commits the pending
/// direction, moves the head one cell with toroidal wraparound, and resolves
/// self-collision and food consumption.
///
/// A colliding move is rejected rather than applied: the phase flips to
/// `GameOver` and the snake is left exactly as it was, so the observable
/// final state is the pre-collision body.
pub fn tick(state: &mut GameState) {
    match state.phase {
        GamePhase::Running => {}
        GamePhase::Paused | GamePhase::GameOver | GamePhase::BoardFull => return,
    }

    if let Some(dir) = state.pending_direction.take() {
        state.direction = dir;
    }

    state.time_ticks += 1;

    let new_head = state.head().step(state.direction, state.grid_size);

    // Checked against the full current body, tail included: the check runs
    // before the tail pop, so moving into the cell the tail is about to
    // vacate is fatal (the original game's literal behavior).
    if state.snake.contains(&new_head) {
        state.phase = GamePhase::GameOver;
        return;
    }

    state.snake.push_front(new_head);

    if new_head == state.food {
        // Growth tick: tail kept, food replaced
        state.score += 1;
        if !state.place_food() {
            state.phase = GamePhase::BoardFull;
        }
    } else {
        state.snake.pop_back();
    }
}
