//! Records mirroring the API's JSON resources.
//!
//! Every field is optional: the `part` selection can drop any of them, and a
//! missing field maps to `None` instead of failing the whole response.

pub mod category;
pub mod channel;
pub mod comment;
pub mod common;
pub mod playlist;
pub mod playlist_item;
pub mod video;

pub use category::*;
pub use channel::*;
pub use comment::*;
pub use common::*;
pub use playlist::*;
pub use playlist_item::*;
pub use video::*;
