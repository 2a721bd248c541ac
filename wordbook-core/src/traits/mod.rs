//! Host presentation abstraction trait definition

mod surfaces;

pub use surfaces::{write_surface, SurfaceId, SurfaceUpdate, Surfaces};
