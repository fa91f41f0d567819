/// A rule in its textual form: the shape rule files are written in and the
/// shape resolved rules are rendered back to.
///
/// `ports` and `addresses` hold comma-separated ranges such as
/// `"80,443,8000-8080"` or `"192.168.0.1-192.168.255.255"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase", default))]
pub struct RuleRecord {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Desc"))]
    pub description: String,
    pub allow: bool,
    pub protocol: String,
    #[cfg_attr(feature = "serde", serde(rename = "Port"))]
    pub ports: String,
    #[cfg_attr(feature = "serde", serde(rename = "IP"))]
    pub addresses: String,
}

impl RuleRecord {
    /// Records whose name starts with `#` are commented out.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.name.starts_with('#')
    }
}
