//! Effectiveness chart loader.

use std::path::Path;

use battle_core::{ElementType, TypeChart};

use crate::loaders::{LoadResult, read_file};

/// Loader for a sparse [`TypeChart`].
///
/// File format: `Vec<(ElementType, ElementType, f64)>` as
/// `(attack, defender, multiplier)`. Pairs that are not listed stay neutral.
///
/// ```ron
/// [
///     (fire, grass, 2.0),
///     (fire, water, 0.5),
/// ]
/// ```
pub struct ChartLoader;

impl ChartLoader {
    pub fn load(path: &Path) -> LoadResult<TypeChart> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid type chart in {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<TypeChart> {
        let entries: Vec<(ElementType, ElementType, f64)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse type chart RON: {}", e))?;

        let mut chart = TypeChart::empty();
        for (attack, defender, value) in entries {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("multiplier for {attack} against {defender} must be positive, got {value}");
            }
            chart.set(attack, defender, value);
        }
        Ok(chart)
    }
}
