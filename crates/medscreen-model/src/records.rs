use serde::{Deserialize, Serialize};

/// One row of the analysis-definition reference table.
///
/// `min_value`/`max_value` may be absent in the source table for boolean
/// ("simple") analyses; reference normalization pins those to `[0, 1]` so the
/// range logic downstream always sees usable bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDefinition {
    pub id: i64,
    pub name: String,
    pub is_simple: bool,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl AnalysisDefinition {
    /// Apply the boolean-analysis bound pinning. Idempotent.
    pub fn normalized(mut self) -> Self {
        if self.is_simple {
            self.min_value = Some(0.0);
            self.max_value = Some(1.0);
        }
        self
    }
}

/// Immutable patient reference data used in the final aggregation join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

/// A result value after vocabulary normalization.
///
/// Values the vocabulary recognizes become numeric; anything else passes
/// through as text and only fails later, at the classifier's numeric cast.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

impl ResultValue {
    /// Render the value the way it is written into the canonical frame.
    pub fn as_cell(&self) -> String {
        match self {
            Self::Number(v) => {
                if v.fract() == 0.0 {
                    format!("{}", *v as i64)
                } else {
                    v.to_string()
                }
            }
            Self::Text(s) => s.clone(),
        }
    }
}

/// A validated result record, keyed by the external labels on output.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub patient_code: i64,
    pub analysis: String,
    pub value: ResultValue,
}

/// Human-readable classification attached to a retained outlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conclusion {
    /// Boolean analysis came back positive.
    Positive,
    /// Value above the reference range.
    Elevated,
    /// Value below the reference range.
    Decreased,
}

impl Conclusion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Elevated => "Elevated",
            Self::Decreased => "Decreased",
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
