//! Rendering modes for RUTs.

/// How a RUT is rendered as text.
///
/// - [`RutFormat::Full`]: dots and dash (`12.345.678-5`)
/// - [`RutFormat::OnlyDash`]: dash only (`12345678-5`)
/// - [`RutFormat::Escaped`]: no punctuation (`123456785`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RutFormat {
    #[default]
    Full,
    OnlyDash,
    Escaped,
}

impl RutFormat {
    /// Every rendering mode.
    pub const ALL: [RutFormat; 3] = [RutFormat::Full, RutFormat::OnlyDash, RutFormat::Escaped];

    /// Returns the mode name as used in configuration (`full`, `only_dash`, `escaped`).
    pub fn name(self) -> &'static str {
        match self {
            RutFormat::Full => "full",
            RutFormat::OnlyDash => "only_dash",
            RutFormat::Escaped => "escaped",
        }
    }

    /// Looks a mode up by its configuration name.
    pub fn from_name(name: &str) -> Option<RutFormat> {
        RutFormat::ALL.into_iter().find(|f| f.name() == name)
    }
}
