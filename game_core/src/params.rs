/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface-relative geometry
    pub const PADDLE_HEIGHT_RATIO: f32 = 0.15; // of surface height
    pub const PADDLE_WIDTH_RATIO: f32 = 0.2; // of paddle height

    // Paddles (pixels per second)
    pub const HUMAN_PADDLE_SPEED: f32 = 300.0;
    pub const CPU_PADDLE_SPEED: f32 = 150.0;

    // Ball
    pub const BALL_SPEED: f32 = 200.0;

    /// Launch sectors in degrees from +x, y pointing down
    pub const LAUNCH_SECTORS: [(f32, f32); 2] = [(-65.0, 65.0), (115.0, 245.0)];

    // Score
    pub const WIN_SCORE: u8 = 11;

    // Physics
    pub const TICK_RATE: f64 = 100.0; // ticks per second

    // Fallback surface when the host has not reported one yet
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}
