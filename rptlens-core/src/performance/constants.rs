/// Substring every server load report line carries.
pub const SERVER_LOAD_MARKER: &str = "Server load";

/// Samples at or below this FPS count as low.
pub const LOW_FPS_THRESHOLD: u32 = 20;

/// Low-sample fraction above which the sustained low FPS warning fires.
pub const LOW_FPS_RATIO: f64 = 0.10;

/// Upper bounds (inclusive) of the FPS histogram buckets; anything above the
/// last one lands in the overflow bucket.
pub const FPS_BUCKETS: &[u32] = &[5, 10, 20, 30, 40, 50];
