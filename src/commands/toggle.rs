//! Enable switch command

use crate::settings::Settings;
use anyhow::Result;
use std::path::Path;

/// Flip the persisted enable switch and return the new state
///
/// # Errors
///
/// Returns an error if the settings file cannot be read or written.
pub fn run_toggle(path: &Path) -> Result<bool> {
    let mut settings = Settings::load(path)?;
    settings.enabled = !settings.enabled;
    settings.save(path)?;
    Ok(settings.enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        assert!(run_toggle(&path).unwrap());
        assert!(Settings::load(&path).unwrap().enabled);
        assert!(!run_toggle(&path).unwrap());
        assert!(!Settings::load(&path).unwrap().enabled);
    }
}
