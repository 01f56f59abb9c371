// Core engine exports
pub mod discovery;
pub mod draft;
pub mod envelope;
pub mod predicate;
pub mod range;

pub use discovery::{DiscoveryController, PanelState};
pub use draft::{DraftError, FilterDraft};
pub use envelope::{EnvelopeChain, EnvelopeStrategy, DEFAULT_ENVELOPE_PATHS};
pub use predicate::{compute_visible, is_filtering, matches_tutor, SearchTerm};
pub use range::{PriceRange, RangeError, TrackFill, MIN_PRICE_GAP, PRICE_CEILING, PRICE_FLOOR};
