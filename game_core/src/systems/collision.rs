use crate::{Ball, Events, GameMap, Paddle};
use hecs::World;

/// Check the ball against each paddle, left (human) first
pub fn check_paddle_hits(world: &mut World, map: &GameMap, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.deal_with_paddle_hit(paddle, map) {
                events.ball_hit_paddle = true;
            }
        }
    }
}
