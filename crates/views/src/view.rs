use std::fmt;

use crate::{
    PathClass, RECURSIVE_MARKER, ViewError, ViewLine, classify,
    debug_view::{trace_line_mapped, trace_mode_selected, trace_view_compiled},
    error::ViewResult,
};

/// Namespace root marker every depot pattern must begin with.
const NAMESPACE_ROOT: &str = "//";

/// Compiled, ordered client view mapping.
///
/// A `ViewSpec` is built from a multi-line depot path spec and a workspace
/// name via [`compile`](Self::compile). Each non-blank input line becomes one
/// [`ViewLine`] pairing the normalized depot pattern with the client pattern
/// the sync engine should place it at. The mapping mode depends on how many
/// patterns survive:
///
/// - **One pattern** collapses the whole source hierarchy onto the workspace
///   root: the client side keeps only the trailing wildcard token.
/// - **Two or more patterns** each keep their full directory identity nested
///   under the workspace root, so combined sources cannot collide.
///
/// Line order mirrors input order exactly; later lines may override earlier
/// overlapping mappings in the consuming sync engine, so nothing here sorts
/// or deduplicates.
///
/// The [`Display`](fmt::Display) rendering is the exact view-spec syntax the
/// sync engine consumes: `<depotPattern> <clientPattern>` with a single
/// space, lines joined by `\n`, no trailing separators.
///
/// # Examples
///
/// ```
/// use views::ViewSpec;
///
/// let view = ViewSpec::compile("//depot/src", "job1").expect("view compiles");
/// assert_eq!(view.to_string(), "//depot/src/... //job1/...");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewSpec {
    lines: Vec<ViewLine>,
}

impl ViewSpec {
    /// Compiles a depot path spec into the client view mapping for
    /// `workspace`.
    ///
    /// `spec` holds one depot path pattern per line. Blank lines are
    /// dropped; surviving lines are processed in order. Each pattern is
    /// stripped of at most one trailing `/`, then given a `/...` suffix
    /// unless it already ends in a recursive marker, bare or
    /// extension-qualified (see [`classify`]).
    ///
    /// The call is pure: no I/O, no shared state, safe to invoke from any
    /// number of threads at once.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidSpec`] when `spec` is empty or entirely
    /// blank, or when `workspace` is empty or blank. Returns
    /// [`ViewError::MalformedPath`] when a surviving line does not begin
    /// with `//`. Failure is total; no partial mapping is produced.
    pub fn compile(spec: &str, workspace: &str) -> ViewResult<Self> {
        if workspace.trim().is_empty() {
            return Err(ViewError::InvalidSpec("workspace name is empty".to_owned()));
        }
        let patterns: Vec<&str> = spec
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();
        if patterns.is_empty() {
            return Err(ViewError::InvalidSpec("path spec is empty".to_owned()));
        }
        for pattern in &patterns {
            if !pattern.starts_with(NAMESPACE_ROOT) {
                return Err(ViewError::MalformedPath((*pattern).to_owned()));
            }
        }

        let collapse = patterns.len() == 1;
        trace_mode_selected(patterns.len(), collapse);

        let mut lines = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let trimmed = trim_trailing_slash(pattern);
            let class = classify(trimmed);
            let depot = match class {
                PathClass::Wildcarded => trimmed.to_owned(),
                PathClass::Bare => format!("{trimmed}/{RECURSIVE_MARKER}"),
            };
            let client = if collapse {
                format!("{NAMESPACE_ROOT}{workspace}/{}", wildcard_suffix(&depot))
            } else {
                format!(
                    "{NAMESPACE_ROOT}{workspace}/{}",
                    &depot[NAMESPACE_ROOT.len()..]
                )
            };
            trace_line_mapped(&depot, &client, class.is_wildcarded());
            lines.push(ViewLine::new(depot, client));
        }

        trace_view_compiled(workspace, lines.len());
        Ok(Self { lines })
    }

    /// Returns the compiled mapping lines in input order.
    #[must_use]
    pub fn lines(&self) -> &[ViewLine] {
        &self.lines
    }

    /// Returns the number of mapping lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the view holds no mapping lines.
    ///
    /// [`compile`](Self::compile) never produces an empty view; this exists
    /// for symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for ViewSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Strips exactly one trailing `/`, leaving other paths untouched.
fn trim_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Returns the trailing wildcard token of a normalized depot pattern.
///
/// Every pattern the compiler normalizes carries `/...` ahead of its token.
/// A marker glued directly to a segment name has no such anchor; the final
/// path segment stands in as the token there.
fn wildcard_suffix(path: &str) -> &str {
    match path.rfind("/...") {
        Some(idx) => &path[idx + 1..],
        None => path.rfind('/').map_or(path, |idx| &path[idx + 1..]),
    }
}
