//! Individual transform application steps.

/// Direction a displacement field maps points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Maps moving-space points toward fixed space.
    Forward,
    /// Maps fixed-space points toward moving space.
    Inverse,
}

impl FieldRole {
    /// Wire name of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Inverse => "inverse",
        }
    }
}

/// Grid a displacement field is sampled on.
///
/// ANTs SyN displacement fields are defined on the fixed grid in both
/// directions, so `Fixed` is the only value; an off-grid field is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGrid {
    /// The fixed image grid.
    Fixed,
}

impl FieldGrid {
    /// Wire name of this grid reference.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
        }
    }
}

/// One step of a transform chain.
///
/// Steps are immutable values; file references are opaque tokens and are
/// never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Apply an affine matrix file, optionally inverted.
    Affine { file: String, invert: bool },
    /// Apply a displacement field file sampled on the fixed grid.
    DisplacementField {
        file: String,
        role: FieldRole,
        grid: FieldGrid,
    },
}

impl Step {
    /// Create an affine step.
    pub fn affine(file: impl Into<String>, invert: bool) -> Self {
        Self::Affine {
            file: file.into(),
            invert,
        }
    }

    /// Create a displacement-field step on the fixed grid.
    pub fn field(file: impl Into<String>, role: FieldRole) -> Self {
        Self::DisplacementField {
            file: file.into(),
            role,
            grid: FieldGrid::Fixed,
        }
    }

    /// The referenced transform file.
    pub fn file(&self) -> &str {
        match self {
            Self::Affine { file, .. } | Self::DisplacementField { file, .. } => file,
        }
    }

    /// The invert flag this step contributes when flattened.
    ///
    /// Field steps always contribute `false`: field direction is encoded in
    /// file selection, not an invert flag.
    pub fn invert_flag(&self) -> bool {
        match self {
            Self::Affine { invert, .. } => *invert,
            Self::DisplacementField { .. } => false,
        }
    }
}
