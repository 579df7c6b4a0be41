/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Sampling stride of the basic extractors: every Nth RGBA pixel is
/// inspected.
pub const PIXEL_SAMPLE_STRIDE: usize = 4;

/// Brightness level (0-100) below which the frame is classified Dark.
pub const BRIGHTNESS_DARK_MAX: f64 = 30.0;

/// Brightness level (0-100) below which the frame is classified Dim.
pub const BRIGHTNESS_DIM_MAX: f64 = 60.0;

/// Channel spread (max - min, 8-bit) below which a pixel counts as Gray.
pub const GRAY_CHANNEL_SPREAD: u8 = 30;

/// Step (in pixels) of the coarse grid walked by the basic structure extractor.
pub const STRUCTURE_GRID_STEP: usize = 10;

/// Neighbor luminance difference (8-bit scale) that counts as an edge.
pub const STRUCTURE_EDGE_DIFF: f32 = 30.0;

/// Gaussian blur sigma applied before edge detection.
pub const EDGE_BLUR_SIGMA: f32 = 1.4;

/// Low hysteresis threshold for the edge detector, 8-bit scale.
pub const EDGE_LOW_THRESHOLD: f32 = 50.0;

/// High hysteresis threshold for the edge detector, 8-bit scale.
pub const EDGE_HIGH_THRESHOLD: f32 = 150.0;

/// Minimum contour area, as a fraction of total frame area, for a contour
/// to contribute an indoor/outdoor indicator.
pub const CONTOUR_MIN_AREA_FRACTION: f64 = 0.10;

/// Bounding-box aspect ratio above which a contour indicates a corridor.
pub const CONTOUR_ASPECT_HIGH: f64 = 2.0;

/// Bounding-box aspect ratio below which a contour indicates a corridor.
pub const CONTOUR_ASPECT_LOW: f64 = 0.5;

/// Edge-pixel ratio above which structure complexity is High (and corridor-like).
pub const EDGE_RATIO_HIGH: f64 = 0.1;

/// Edge-pixel ratio above which structure complexity is Medium.
pub const EDGE_RATIO_MEDIUM: f64 = 0.05;

/// Starting value of the additive safety score.
pub const SCORE_BASE: i16 = 100;

/// Score penalty for a Dark brightness status.
pub const SCORE_DARK_PENALTY: i16 = 40;

/// Score penalty for a Dim brightness status.
pub const SCORE_DIM_PENALTY: i16 = 20;

/// Score penalty for an indoor-corridor environment.
pub const SCORE_INDOOR_PENALTY: i16 = 15;

/// Score bonus for a corridor-like structure (clear sightline).
pub const SCORE_CORRIDOR_BONUS: i16 = 10;

/// Safety score reported when the pipeline fails to produce features.
pub const SCORE_FAILURE_DEFAULT: u8 = 50;

/// Side length of the synthetic frame used by the capability warm-up probe.
pub const PROBE_FRAME_SIZE: u32 = 32;
