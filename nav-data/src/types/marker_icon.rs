use serde::Deserialize;

/// Symbolic marker appearance carried by the seed records. The UI decides
/// which image each variant maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Cottage,
    Reception,
    Parking,
    Pool,
    Playground,
    Trail,
}
