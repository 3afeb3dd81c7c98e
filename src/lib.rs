/// Single-player terminal space shooter.
///
/// All gameplay lives in the library so it can be driven and tested without
/// a terminal.  The binary only owns input polling, the frame clock and the
/// crossterm flush of a rasterised [`canvas::Canvas`].

pub mod canvas;
pub mod collectibles;
pub mod collision;
pub mod config;
pub mod entities;
pub mod player;
pub mod scene;
pub mod session;
pub mod wave;
