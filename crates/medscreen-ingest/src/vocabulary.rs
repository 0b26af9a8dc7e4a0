//! Vocabulary document loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use medscreen_model::Vocabulary;

/// Load the positive/negative vocabulary from a JSON document.
///
/// The document has two keys, `negative` and `positive`, each a list of
/// strings; missing keys read as empty lists.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let file = File::open(path).with_context(|| format!("open vocabulary: {}", path.display()))?;
    let vocab: Vocabulary = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse vocabulary: {}", path.display()))?;
    debug!(
        path = %path.display(),
        negative = vocab.negative.len(),
        positive = vocab.positive.len(),
        "loaded vocabulary"
    );
    Ok(vocab)
}
