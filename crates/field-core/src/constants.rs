/// Field tuning constants.
///
/// Timing and decay values that shape how the field moves; keeping them
/// here keeps magic numbers out of the engine and the web adapters.
// Milliseconds between automatic variant advances.
pub const AUTOPLAY_INTERVAL_MS: i32 = 5_200;

// Quiet period before autoplay resumes once the pointer leaves the pill row.
pub const RESUME_DELAY_MS: i32 = 5_000;

// Multiplicative burst decay applied once per frame.
pub const BURST_DECAY: f32 = 0.90;

// Below this the burst snaps to exactly zero.
pub const BURST_FLOOR: f32 = 0.003;

// Device-pixel-ratio cap for the canvas backing store.
pub const MAX_PIXEL_RATIO: f64 = 2.0;
