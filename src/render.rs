//! Routing of meshes to render targets.
//!
//! Every mesh names the shader program it is drawn with. The host decides per
//! frame which framebuffer each program renders into by passing a
//! [`FramebufferMap`] to [`Scene::draw`](crate::data_structures::scene_graph::Scene::draw).
//! Meshes whose program has no entry are not drawn that frame, which is how
//! individual passes select their subset of the scene.
//!
//! # Key types
//!
//! - [`FramebufferMap`] maps shader programs to their output framebuffer
//! - [`FrameStats`] reports what a call to `draw` did
//!

use std::collections::HashMap;

use crate::pipelines::program::{Framebuffer, ShaderId};

/// Output framebuffer per shader program for one draw call of the scene.
pub type FramebufferMap<'a> = HashMap<ShaderId, &'a dyn Framebuffer>;

/// Counters collected while drawing a scene once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Meshes that issued a draw call.
    pub draw_calls: usize,
    /// Meshes skipped because their program has no framebuffer.
    pub skipped: usize,
    /// Programs that received the shared configuration.
    pub programs_configured: usize,
}

impl FrameStats {
    /// Adds up the stats of several passes over the same frame.
    pub fn merge(self, other: FrameStats) -> FrameStats {
        FrameStats {
            draw_calls: self.draw_calls + other.draw_calls,
            skipped: self.skipped + other.skipped,
            programs_configured: self.programs_configured + other.programs_configured,
        }
    }
}
