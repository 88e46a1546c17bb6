#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `sources` models the ways a sync job names what to pull from the
//! version-control server: a classic depot path set ([`DepotSource`]), a
//! repository-graph location set ([`GraphSource`]), or the historical
//! single-path parameter ([`LegacySource`]). Each descriptor resolves to an
//! already-flattened multi-line depot path spec plus an optional opaque
//! pinned-revision token, which is everything the view compiler in
//! [`views`] needs. Revision resolution proper (turning a pin into a
//! changelist or commit) happens on the server side and is out of scope
//! here; pin tokens travel as uninterpreted strings.
//!
//! # Design
//!
//! - [`SyncSource`] is the tagged variant the surrounding integration
//!   stores; [`SyncSource::resolve`] flattens it to a [`Resolved`] value.
//! - [`Resolved::client_view`] feeds the flattened spec straight into
//!   [`views::ViewSpec::compile`], the exact call path a workspace
//!   configuration request takes.
//! - [`PinToken`] carries either downstream pin form (bare changelist
//!   number, or `<pattern>@<contentHash>`) without parsing it.
//!
//! # Errors
//!
//! Construction rejects empty descriptors with [`SourceError::EmptyPaths`];
//! resolution itself is infallible. View compilation reports
//! [`views::ViewError`] for malformed paths or a blank workspace name.
//!
//! # Examples
//!
//! ```
//! use sources::{GraphSource, SyncSource};
//!
//! let source = SyncSource::from(
//!     GraphSource::new("//graph/docker-plugin\n//graph/scm-api-plugin").expect("non-empty"),
//! );
//! let view = source.client_view("job1").expect("view compiles");
//! assert_eq!(view.len(), 2);
//! ```

mod error;
mod pin;
mod resolve;
mod source;

pub use error::{SourceError, SourceResult};
pub use pin::PinToken;
pub use resolve::Resolved;
pub use source::{DepotSource, GraphSource, LegacySource, SyncSource};
