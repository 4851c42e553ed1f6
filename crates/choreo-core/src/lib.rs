pub mod choreography;
pub mod config;
pub mod easing;
pub mod error;
pub mod phase;
pub mod reveal;
pub mod section;
pub mod timing;
pub mod tracker;
pub mod transform;
pub mod viewport;

pub use choreography::{Choreographer, RevealFrame, SectionFrame};
pub use config::ChoreoConfig;
pub use error::{Error, Result};
pub use phase::Phase;
pub use section::{PhaseStrategy, SectionSpec, Track};
pub use tracker::{ScrollSample, ScrollTracker};
pub use transform::AnimationState;
pub use viewport::{MotionPreference, ViewportMetrics};
