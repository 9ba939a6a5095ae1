/**
 * This module contains the CPU side of external resources: geometry to be
 * uploaded and textures to be loaded by the host's graphics backend.
 */
pub mod mesh;
pub mod texture;
