use crate::{Ball, Events, GameMap, GameRng, Paddle, Score, Side};
use hecs::World;

/// Which side scores when `ball` has left the field, if any.
///
/// Leaving on the left concedes to the right paddle and vice versa.
pub fn scoring_side(ball: &Ball, map: &GameMap) -> Option<Side> {
    if ball.pos.x <= 0.0 {
        Some(Side::Right)
    } else if ball.pos.x >= map.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Check if ball left the arena; a point resets the field but not the score
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let scorer = world
        .query::<&Ball>()
        .iter()
        .find_map(|(_e, ball)| scoring_side(ball, map))?;

    score.increment(scorer);
    events.scored = Some(scorer);
    reset_positions(world, map, rng);
    Some(scorer)
}

/// Set up the field for the next point
pub fn reset_positions(world: &mut World, map: &GameMap, rng: &mut GameRng) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.reset_position(map);
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(map, rng);
    }
}
