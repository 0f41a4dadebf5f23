//! Angle and distance helpers shared by the ball and paddle systems

use glam::Vec2;
use rand::Rng;

use crate::params::Params;

/// Pick a launch angle (radians) uniformly from one of the launch sectors.
///
/// Each sector is chosen with equal probability, so the ball always heads
/// toward a paddle rather than bouncing between the end walls.
pub fn launch_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let sectors = &Params::LAUNCH_SECTORS;
    let (min, max) = sectors[rng.gen_range(0..sectors.len())];
    rng.gen_range(min..=max).to_radians()
}

/// Unit vector for an angle measured from +x (y down)
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of `dir` in degrees, normalized into [-180, 180]
pub fn angle_degrees(dir: Vec2) -> f32 {
    dir.y.atan2(dir.x).to_degrees()
}

/// Whether an angle in degrees lies in one of the launch sectors (mod 360)
pub fn in_launch_sector(degrees: f32) -> bool {
    let normalized = degrees.rem_euclid(360.0);
    Params::LAUNCH_SECTORS.iter().any(|&(min, max)| {
        [normalized, normalized - 360.0]
            .iter()
            .any(|d| *d >= min - 1e-3 && *d <= max + 1e-3)
    })
}

/// Signed distance from a paddle's goal-line plane to a point, along the
/// paddle's facing axis. Negative means the point is behind the paddle.
pub fn signed_distance(facing: f32, plane_x: f32, x: f32) -> f32 {
    facing * (x - plane_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_launch_angles_stay_in_sectors() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut forward = 0;
        let mut backward = 0;
        for _ in 0..10_000 {
            let dir = direction_from_angle(launch_angle(&mut rng));
            let deg = angle_degrees(dir);
            assert!(in_launch_sector(deg), "angle {deg} outside launch sectors");
            if dir.x > 0.0 {
                forward += 1;
            } else {
                backward += 1;
            }
        }
        // Both sectors get used
        assert!(forward > 4_000 && backward > 4_000);
    }

    #[test]
    fn test_sector_boundaries() {
        assert!(in_launch_sector(65.0));
        assert!(in_launch_sector(-65.0));
        assert!(in_launch_sector(180.0));
        assert!(in_launch_sector(-115.0)); // 245°
        assert!(!in_launch_sector(90.0));
        assert!(!in_launch_sector(-90.0));
        assert!(!in_launch_sector(70.0));
    }

    #[test]
    fn test_direction_is_unit() {
        let dir = direction_from_angle(1.0);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_signed_distance() {
        assert_eq!(signed_distance(1.0, 18.0, 20.0), 2.0);
        assert_eq!(signed_distance(1.0, 18.0, 10.0), -8.0);
        assert_eq!(signed_distance(-1.0, 782.0, 780.0), 2.0);
        assert_eq!(signed_distance(-1.0, 782.0, 790.0), -8.0);
    }
}
