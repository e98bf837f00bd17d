//! Provider-agnostic DNS record management.
//!
//! This crate contains the generic record model and the capability traits that
//! DNS provider adapters implement. Adapters translate between these types and
//! their provider's API; callers never see provider wire formats.
//!
//! ## Architectural Layer
//!
//! **Domain model + port definitions.** This crate has no I/O dependencies.
//! It defines *what* a provider must offer; adapter crates such as `inwx`
//! define *how*.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`record`] | [`Record`] and its [`RecordId`] |
//! | [`zone`] | [`Zone`] and name relativization helpers |
//! | [`provider`] | Capability traits and the partial-batch error |

pub mod provider;
pub mod record;
pub mod zone;

// Re-export everything at the crate root for ergonomic usage by adapters.
pub use provider::{RecordAppender, RecordDeleter, RecordGetter, RecordSetter, SetRecordsError};
pub use record::{Record, RecordId};
pub use zone::{absolute_name, relative_name, Zone, APEX};
