use views::{ViewResult, ViewSpec};

use crate::PinToken;

/// Output of resolving a source descriptor: the flattened multi-line depot
/// path spec plus the pin token to sync at, if any.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolved {
    pub(crate) path_spec: String,
    pub(crate) pin: Option<PinToken>,
}

impl Resolved {
    /// Returns the flattened depot path spec, one pattern per line.
    #[must_use]
    pub fn path_spec(&self) -> &str {
        &self.path_spec
    }

    /// Returns the pinned-revision token, if one was supplied.
    #[must_use]
    pub fn pin(&self) -> Option<&PinToken> {
        self.pin.as_ref()
    }

    /// Compiles the client view mapping placing this source under
    /// `workspace`.
    ///
    /// # Errors
    ///
    /// Propagates [`views::ViewError`] from the compiler; source
    /// construction already rejects empty descriptors, so this only fails
    /// on a malformed depot path or a blank workspace name.
    pub fn client_view(&self, workspace: &str) -> ViewResult<ViewSpec> {
        ViewSpec::compile(&self.path_spec, workspace)
    }
}
