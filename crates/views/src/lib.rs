#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `views` compiles depot path patterns into the client view mapping that
//! drives a sync operation's file placement decisions. Given a multi-line
//! path spec and a workspace name it produces the ordered table of
//! `<depotPattern> <clientPattern>` pairs the sync engine consumes, byte for
//! byte in the engine's own view-spec syntax. The compiler reconciles two
//! wildcard conventions, the bare recursive marker (`...`) and the
//! extension-qualified marker (`....java`), and two mapping modes: a single
//! source pattern collapses onto the workspace root, while several patterns
//! combined into one workspace each keep their full directory identity.
//!
//! # Design
//!
//! - [`classify`] decides whether a trimmed pattern already ends in a
//!   recursive marker. It is a pure leaf; it never validates marker
//!   well-formedness, only whether one is present.
//! - [`ViewSpec`] owns per-line normalization (trailing-slash stripping,
//!   marker attachment) and mode selection, built in one pass by
//!   [`ViewSpec::compile`]. Each row is a [`ViewLine`]; the
//!   [`Display`](std::fmt::Display) rendering is the downstream syntax.
//!
//! # Invariants
//!
//! - Compiling a pattern that already ends in a recursive marker never adds
//!   a second marker.
//! - A single-pattern view's client side holds exactly the workspace name
//!   and the wildcard token; no depot directory segment survives.
//! - A multi-pattern view's client side, workspace root removed, is
//!   character-for-character the depot side with its leading `//` removed.
//! - The Nth output line always corresponds to the Nth input line.
//!
//! # Errors
//!
//! [`ViewSpec::compile`] reports [`ViewError`] for an empty or blank spec,
//! an empty workspace name, or a line missing the `//` namespace root. The
//! offending input is echoed in the error; no partial mapping is returned.
//!
//! # Examples
//!
//! ```
//! use views::ViewSpec;
//!
//! let view = ViewSpec::compile("//depot/src\n//depot/tgt", "job1").expect("view compiles");
//! assert_eq!(
//!     view.to_string(),
//!     "//depot/src/... //job1/depot/src/...\n//depot/tgt/... //job1/depot/tgt/...",
//! );
//! ```

mod debug_view;
mod error;
mod line;
mod marker;
mod view;

pub use error::{ViewError, ViewResult};
pub use line::ViewLine;
pub use marker::{PathClass, RECURSIVE_MARKER, classify};
pub use view::ViewSpec;
