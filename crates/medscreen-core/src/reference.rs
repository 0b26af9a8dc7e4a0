//! Reference-range normalization.

use polars::prelude::{DataFrame, IntoLazy, col, lit, when};

use medscreen_model::labels::SIMPLE_FLAG;

use crate::error::Result;
use crate::util::ensure_columns;

/// Pin boolean ("simple") analyses to the synthetic `[0, 1]` range.
///
/// Rows with `is_simple == "Y"` get `min_value = 0`, `max_value = 1`; all
/// other rows keep their bounds. The classifier still decides boolean
/// outlier-ness from `is_simple`, not from these bounds; the pinned range is
/// kept so every definition carries usable numeric bounds. Idempotent.
pub fn normalize_references(definitions: &DataFrame) -> Result<DataFrame> {
    ensure_columns(definitions, &["id", "name", "is_simple", "min_value", "max_value"])?;

    let simple = col("is_simple").eq(lit(SIMPLE_FLAG));
    let normalized = definitions
        .clone()
        .lazy()
        .with_columns([
            when(simple.clone())
                .then(lit(0.0))
                .otherwise(col("min_value"))
                .alias("min_value"),
            when(simple)
                .then(lit(1.0))
                .otherwise(col("max_value"))
                .alias("max_value"),
        ])
        .collect()?;
    Ok(normalized)
}
