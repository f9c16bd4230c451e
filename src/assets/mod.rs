mod atlas;

pub use atlas::{ATLAS_COLS, AtlasError, load_store, slice_atlas};
