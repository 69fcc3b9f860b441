//! Core site model: static content, routing and the state machines behind
//! the interactive widgets. Nothing in here touches the DOM.

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod hero;
pub mod marquee;
pub mod nav;
pub mod routes;
pub mod selection;
#[cfg(test)]
mod tests;
pub mod tilt;

pub use hero::{HeroPhase, HeroSequencer, HeroStage, HeroTimeline, OnceLatch, run_sequence};
pub use marquee::{MarqueeLayout, MarqueeSizer};
pub use nav::NavState;
pub use routes::{SiteRoute, Target, resolve};
pub use tilt::{LogoTilt, Rect};
