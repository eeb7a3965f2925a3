//! Battle setup loader.

use std::path::Path;

use battle_core::BattleSetup;

use crate::loaders::{LoadResult, read_file};

/// Loader for a complete [`BattleSetup`] (both combatants and the first turn).
pub struct SetupLoader;

impl SetupLoader {
    /// Load and validate a setup from a RON file.
    pub fn load(path: &Path) -> LoadResult<BattleSetup> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid battle setup in {}: {}", path.display(), e))
    }

    /// Parse and validate a setup from RON text.
    ///
    /// ```ron
    /// (
    ///     combatants: (
    ///         player: (name: "Cinderpaw", types: [fire], max_health: 220, ...),
    ///         opponent: (name: "Tidemaw", types: [water, ground], max_health: 260, ...),
    ///     ),
    ///     first_turn: player,
    /// )
    /// ```
    pub fn parse(content: &str) -> LoadResult<BattleSetup> {
        let setup: BattleSetup = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse battle setup RON: {}", e))?;
        setup.validate()?;
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn data_path(file: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
    }

    #[test]
    fn bundled_setup_matches_the_built_in_roster() {
        let loaded = SetupLoader::load(&data_path("default_battle.ron")).unwrap();
        assert_eq!(loaded, crate::default_setup());
    }

    #[test]
    fn malformed_setup_is_rejected() {
        let ron = r#"(
            combatants: (
                player: (name: "Pebble", types: [], max_health: 10, max_energy: 0, moves: []),
                opponent: (name: "Stone", types: [ground], max_health: 10, max_energy: 0, moves: []),
            ),
            first_turn: player,
        )"#;
        let err = SetupLoader::parse(ron).unwrap_err();
        assert!(err.to_string().contains("Pebble"), "{err}");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = SetupLoader::load(Path::new("/nonexistent/battle.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/battle.ron"));
    }
}
