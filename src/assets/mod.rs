//! Frame sequence assets: where frames live, how they decode, and the background pool that
//! loads them for the player.

pub mod decode;
pub mod pool;
pub mod source;
