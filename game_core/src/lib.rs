pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod game_loop;
pub mod geometry;
pub mod host;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use game_loop::*;
pub use host::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed-size logic tick of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &InputState,
    rng: &mut GameRng,
    dt: f32,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball (walls first, then motion)
    move_ball(world, map, dt, events);

    // 2. Ball vs paddles, human first
    check_paddle_hits(world, map, events);

    // 3. Check scoring (ball exited arena)
    check_scoring(world, map, score, events, rng);

    // 4. Win condition
    events.winner = score.has_winner(config.win_score);

    // 5. Move paddles from input / ball position
    move_paddles(world, map, input, dt);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
