//! Reconciliation core: row identity, range trimming, set difference.
//! Pure functions over in-memory tables; all I/O happens in the loader
//! before any of this runs.

pub mod identity;
pub mod reconcile;
pub mod trim;

pub use identity::{ConcatHash, Identity, IdentityScheme};
pub use reconcile::{ReconcileOutcome, reconcile};
pub use trim::{first_index_on_or_after, last_index_on_or_before, trim_to_window};
