//! muxu drives the Muxu bakery site: a scroll-captured hero animation plus the storefront
//! plumbing behind it.
//!
//! # Hero player
//!
//! 1. **Input**: wheel and touch events reduce to a [`Gesture`] with a direction.
//! 2. **Sweep**: a gesture starts a timed sweep to the first or last frame; the index follows
//!    wall-clock time, so a sweep never skips its end however fast frames are painted.
//! 3. **Load**: frames decode on a [`DecodePool`] and land in a bounded [`FrameCache`] that
//!    evicts the frame farthest from the playhead.
//! 4. **Paint**: each tick resolves the nearest cached frame and the overlay fades for the
//!    current progress; [`render_cover`] paints it into a viewport.
//!
//! # Storefront
//!
//! [`catalog`](commerce::catalog), [`Cart`], two [`CheckoutBackend`]s behind an
//! [`HttpTransport`], [`Messages`] for es/en copy and [`ContactForm`] verification.
#![forbid(unsafe_code)]

pub mod assets;
pub mod commerce;
pub mod config;
pub mod contact;
pub mod foundation;
pub mod http;
pub mod locale;
pub mod player;
pub mod render;

pub use assets::decode::{DecodedFrame, decode_frame};
pub use assets::pool::{DecodePool, load_frame};
pub use assets::source::{
    AssetRoot, HttpRoot, SequenceMeta, frame_file_name, resolve_frame_count,
};
pub use commerce::cart::{Cart, CartItem};
pub use commerce::catalog::{Product, Size, SizeOption, format_price, pricing_options};
pub use commerce::checkout::{
    CardCheckout, CheckoutBackend, CheckoutKind, CheckoutUrl, HostedCheckout,
    parse_checkout_response,
};
pub use config::{CheckoutConfig, Config, PlayerConfig};
pub use contact::{ChallengeVerifier, ContactForm};
pub use foundation::core::{FrameCount, FrameIndex};
pub use foundation::error::{MuxuError, MuxuResult};
pub use http::{HttpResponse, HttpTransport, UreqTransport};
pub use locale::{Locale, Messages};
pub use player::cache::FrameCache;
pub use player::input::{Direction, Gesture, InputEvent, InputNormalizer};
pub use player::overlay::{OverlayStyle, Overlays, Ramp, overlays};
pub use player::prefetch::{FrameLoad, FrameLoader, Prefetcher};
pub use player::sweep::{PlaybackState, sample_sweep, sweep_duration};
pub use player::{FramePlayer, FrameTick, GestureOutcome};
pub use render::cover::{cover_source_rect, render_cover};
