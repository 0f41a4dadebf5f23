use crate::{Ball, Events, GameMap, InputState, Paddle};
use hecs::World;

/// Advance the ball: wall reflection first, then motion
pub fn move_ball(world: &mut World, map: &GameMap, dt: f32, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.update(dt, map) {
            events.ball_hit_wall = true;
        }
    }
}

/// Move each paddle with its own control strategy
pub fn move_paddles(world: &mut World, map: &GameMap, input: &InputState, dt: f32) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y)
        .unwrap_or(map.height * 0.5);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.steer(dt, input, ball_y, map);
    }
}
