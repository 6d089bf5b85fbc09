#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One row of a generated dimension scale.
///
/// Tokens carry no identity across regenerations beyond `index`.
pub struct GeneratedToken {
    /// 0-based position in the scale.
    pub index: usize,
    /// Name from the configured naming convention.
    pub name: String,
    /// Value after optical compensation and density, before rounding.
    pub raw_value: f64,
    /// Final value.
    pub value: f64,
    /// `value` formatted in the output unit.
    pub display_value: String,
    /// `value / max(1, rem_base)`.
    pub rem_value: f64,
    /// Human-readable derivation, diagnostic only.
    pub formula: String,
    /// Viewport-responsive `clamp()` expression, present iff the scale is fluid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid_value_expression: Option<String>,
    /// CSS custom property name, `--{prefix}-{name}`.
    pub css_var: String,
    /// Whether `value` came from an explicit lock.
    pub locked: bool,
    /// `-value`, present iff the scale has a negative counterpart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_value: Option<f64>,
    /// `-{name}`, present iff the scale has a negative counterpart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_name: Option<String>,
}
