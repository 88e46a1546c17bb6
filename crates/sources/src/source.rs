use views::{ViewResult, ViewSpec};

use crate::{PinToken, Resolved, SourceError, error::SourceResult};

/// Classic depot path source: one or more `//depot/...`-style patterns.
///
/// The sync engine reports pins for this source kind as bare changelist
/// numbers.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepotSource {
    depot: String,
    pin: Option<PinToken>,
}

impl DepotSource {
    /// Creates a depot source from a path spec, one pattern per line.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyPaths`] when the spec is empty or blank.
    pub fn new(depot: impl Into<String>) -> SourceResult<Self> {
        let depot = non_blank(depot.into())?;
        Ok(Self { depot, pin: None })
    }

    /// Pins the source to a revision token.
    #[must_use]
    pub fn with_pin(mut self, pin: impl Into<PinToken>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    /// Returns the raw depot path spec.
    #[must_use]
    pub fn depot(&self) -> &str {
        &self.depot
    }

    /// Resolves to the flattened path spec and pin token.
    #[must_use]
    pub fn resolve(&self) -> Resolved {
        Resolved {
            path_spec: self.depot.clone(),
            pin: self.pin.clone(),
        }
    }
}

/// Repository-graph source: one or more graph repo locations.
///
/// The sync engine reports pins for this source kind in the
/// `<pattern>@<contentHash>` form.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSource {
    graph: String,
    pin: Option<PinToken>,
}

impl GraphSource {
    /// Creates a graph source from a location spec, one repo per line.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyPaths`] when the spec is empty or blank.
    pub fn new(graph: impl Into<String>) -> SourceResult<Self> {
        let graph = non_blank(graph.into())?;
        Ok(Self { graph, pin: None })
    }

    /// Pins the source to a revision token.
    #[must_use]
    pub fn with_pin(mut self, pin: impl Into<PinToken>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    /// Returns the raw graph location spec.
    #[must_use]
    pub fn graph(&self) -> &str {
        &self.graph
    }

    /// Resolves to the flattened path spec and pin token.
    #[must_use]
    pub fn resolve(&self) -> Resolved {
        Resolved {
            path_spec: self.graph.clone(),
            pin: self.pin.clone(),
        }
    }
}

/// Historical single `depotPath` parameter kept for scripts that predate
/// explicit source kinds. Resolves exactly like a depot source.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacySource {
    depot_path: String,
    pin: Option<PinToken>,
}

impl LegacySource {
    /// Creates a legacy source from the historical `depotPath` value.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyPaths`] when the value is empty or blank.
    pub fn new(depot_path: impl Into<String>) -> SourceResult<Self> {
        let depot_path = non_blank(depot_path.into())?;
        Ok(Self {
            depot_path,
            pin: None,
        })
    }

    /// Pins the source to a revision token.
    #[must_use]
    pub fn with_pin(mut self, pin: impl Into<PinToken>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    /// Returns the raw depot path value.
    #[must_use]
    pub fn depot_path(&self) -> &str {
        &self.depot_path
    }

    /// Resolves to the flattened path spec and pin token.
    #[must_use]
    pub fn resolve(&self) -> Resolved {
        Resolved {
            path_spec: self.depot_path.clone(),
            pin: self.pin.clone(),
        }
    }
}

/// Tagged source descriptor covering every way a job names what to sync.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyncSource {
    /// Classic depot path source.
    Depot(DepotSource),
    /// Repository-graph source.
    Graph(GraphSource),
    /// Legacy `depotPath` parameter.
    Legacy(LegacySource),
}

impl SyncSource {
    /// Resolves the descriptor to its flattened path spec and pin token.
    #[must_use]
    pub fn resolve(&self) -> Resolved {
        match self {
            Self::Depot(source) => source.resolve(),
            Self::Graph(source) => source.resolve(),
            Self::Legacy(source) => source.resolve(),
        }
    }

    /// Resolves the descriptor and compiles its client view mapping for
    /// `workspace` in one step.
    ///
    /// # Errors
    ///
    /// Propagates [`views::ViewError`] from the compiler.
    pub fn client_view(&self, workspace: &str) -> ViewResult<ViewSpec> {
        self.resolve().client_view(workspace)
    }
}

impl From<DepotSource> for SyncSource {
    fn from(source: DepotSource) -> Self {
        Self::Depot(source)
    }
}

impl From<GraphSource> for SyncSource {
    fn from(source: GraphSource) -> Self {
        Self::Graph(source)
    }
}

impl From<LegacySource> for SyncSource {
    fn from(source: LegacySource) -> Self {
        Self::Legacy(source)
    }
}

/// Rejects empty or whitespace-only descriptors at construction so
/// resolution itself never fails.
fn non_blank(value: String) -> SourceResult<String> {
    if value.trim().is_empty() {
        return Err(SourceError::EmptyPaths);
    }
    Ok(value)
}
