use serde::{Deserialize, Serialize};

/// Proportionality key for splitting a shared cost across entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationBasis {
    /// Split by total weight (quantity × unit weight).
    Weight,
    /// Split by total volume (quantity × unit volume).
    Volume,
    /// Split by declared value (quantity × unit price, in base currency).
    DeclaredValue,
    /// Split by unit count.
    Units,
    /// Split by container-box count (order-level entities only).
    Boxes,
}

impl core::fmt::Display for AllocationBasis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            AllocationBasis::Weight => "weight",
            AllocationBasis::Volume => "volume",
            AllocationBasis::DeclaredValue => "declared_value",
            AllocationBasis::Units => "units",
            AllocationBasis::Boxes => "boxes",
        };
        f.write_str(name)
    }
}
