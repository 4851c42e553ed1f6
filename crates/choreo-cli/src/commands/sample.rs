use anyhow::Result;

use choreo_core::{
    ChoreoConfig, Choreographer, MotionPreference, ScrollSample, ViewportMetrics,
};

/// Compute and print the per-section animation state at one scroll
/// offset as pretty JSON. Useful for debugging tuning changes without
/// launching the preview.
pub fn run(config: ChoreoConfig, offset: f64, width: f64, height: f64, reduced: bool) -> Result<()> {
    let viewport = ViewportMetrics::new(width, height);
    let choreographer = Choreographer::new(&config);
    let motion = MotionPreference::from_reduced(reduced || config.motion.reduced);

    let clamped = offset.clamp(0.0, choreographer.track_height(&viewport));
    let sample = ScrollSample {
        offset: clamped,
        delta: 0.0,
    };
    let frames = choreographer.frame(sample, &viewport, motion);

    println!("{}", serde_json::to_string_pretty(&frames)?);
    Ok(())
}
