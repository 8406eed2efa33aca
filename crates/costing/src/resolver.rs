//! Allocation-basis resolution for expense types.
//!
//! Resolution is total: whatever the configuration collaborator does —
//! missing table, missing entry, failed read — the resolver lands on the
//! built-in keyword table and returns a basis. Callers never handle a
//! resolution failure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use landedcost_core::{DomainError, DomainResult};
use landedcost_purchasing::ExpenseCategory;

use crate::basis::AllocationBasis;

/// Built-in keyword table over expense-type labels.
///
/// Freight-like labels split by box count, customs-like labels by declared
/// value, everything else by unit count. Matching is case-insensitive
/// substring, in table order.
const KEYWORD_TABLE: &[(&str, AllocationBasis)] = &[
    ("flete", AllocationBasis::Boxes),
    ("transporte", AllocationBasis::Boxes),
    ("almacenaje", AllocationBasis::Boxes),
    ("aduana", AllocationBasis::DeclaredValue),
    ("impuesto", AllocationBasis::DeclaredValue),
    ("seguro", AllocationBasis::DeclaredValue),
    ("broker", AllocationBasis::DeclaredValue),
];

/// Keyword-table lookup; the safe default every other tier degrades to.
fn keyword_basis(label: &str) -> AllocationBasis {
    let label = label.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|&(_, basis)| basis)
        .unwrap_or(AllocationBasis::Units)
}

/// External source of per-category basis overrides.
///
/// Implementations read persisted configuration, so the lookup is fallible;
/// the resolver treats any error as "no override".
pub trait BasisOverrides {
    fn lookup(&self, category: ExpenseCategory) -> anyhow::Result<Option<AllocationBasis>>;
}

/// In-memory override table, validated from a JSON configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisOverrideTable {
    entries: HashMap<ExpenseCategory, AllocationBasis>,
}

impl BasisOverrideTable {
    pub fn new(entries: HashMap<ExpenseCategory, AllocationBasis>) -> Self {
        Self { entries }
    }

    /// Parse and validate an override document, e.g.
    /// `{"freight": "boxes", "customs": "declared_value"}`.
    pub fn from_json(doc: &str) -> DomainResult<Self> {
        serde_json::from_str(doc)
            .map_err(|e| DomainError::configuration(format!("basis override table: {e}")))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BasisOverrides for BasisOverrideTable {
    fn lookup(&self, category: ExpenseCategory) -> anyhow::Result<Option<AllocationBasis>> {
        Ok(self.entries.get(&category).copied())
    }
}

/// Resolves an expense-type label to an allocation basis.
///
/// With `use_overrides` off (the safe default) only the keyword table runs.
/// With it on, the label is classified into an [`ExpenseCategory`] and the
/// override source consulted first; a missing or failing override falls
/// through to the keyword table.
#[derive(Debug, Clone, Default)]
pub struct BasisResolver<O = BasisOverrideTable>
where
    O: BasisOverrides,
{
    use_overrides: bool,
    overrides: Option<O>,
}

impl BasisResolver<BasisOverrideTable> {
    /// Keyword-table-only resolver (the override switch off).
    pub fn keyword_only() -> Self {
        Self {
            use_overrides: false,
            overrides: None,
        }
    }
}

impl<O> BasisResolver<O>
where
    O: BasisOverrides,
{
    /// Resolver with the override switch on.
    pub fn with_overrides(overrides: O) -> Self {
        Self {
            use_overrides: true,
            overrides: Some(overrides),
        }
    }

    /// Resolve the allocation basis for an expense-type label. Total; never
    /// fails.
    pub fn resolve(&self, label: &str) -> AllocationBasis {
        if !self.use_overrides {
            return keyword_basis(label);
        }

        let category = ExpenseCategory::classify(label);
        match self.overrides.as_ref().map(|o| o.lookup(category)) {
            Some(Ok(Some(basis))) => basis,
            Some(Ok(None)) | None => keyword_basis(label),
            Some(Err(error)) => {
                tracing::warn!(
                    %label,
                    ?category,
                    %error,
                    "basis override lookup failed, using keyword table"
                );
                keyword_basis(label)
            }
        }
    }
}
