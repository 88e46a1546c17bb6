//! Structured tracing for view compilation.
//!
//! Events are emitted while a spec is compiled into a client view mapping.
//! All tracing is conditionally compiled behind the `tracing` feature flag
//! and produces no-op inline functions when disabled.

/// Target name for tracing events, namespacing the view compiler.
#[cfg(feature = "tracing")]
const VIEW_TARGET: &str = "p4sync::view";

/// Traces the mapping mode chosen for a spec.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_mode_selected(pattern_count: usize, collapsed: bool) {
    tracing::debug!(
        target: VIEW_TARGET,
        pattern_count = pattern_count,
        collapsed = collapsed,
        "view_mode_selected"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_mode_selected(_pattern_count: usize, _collapsed: bool) {}

/// Traces one compiled mapping line.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_line_mapped(depot: &str, client: &str, was_wildcarded: bool) {
    tracing::trace!(
        target: VIEW_TARGET,
        depot = %depot,
        client = %client,
        was_wildcarded = was_wildcarded,
        "view_line_mapped"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_line_mapped(_depot: &str, _client: &str, _was_wildcarded: bool) {}

/// Traces the completed view spec.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_view_compiled(workspace: &str, line_count: usize) {
    tracing::info!(
        target: VIEW_TARGET,
        workspace = %workspace,
        line_count = line_count,
        "view_compiled"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_view_compiled(_workspace: &str, _line_count: usize) {}
