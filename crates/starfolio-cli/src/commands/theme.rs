use anyhow::{anyhow, Result};

use starfolio_core::theme::{ConfigPreferenceStore, ThemeManager, ThemePreference};

fn manager() -> Result<ThemeManager> {
    Ok(ThemeManager::new(Box::new(ConfigPreferenceStore::new()))?)
}

pub fn show() -> Result<()> {
    let manager = manager()?;
    println!("{}", manager.preference().as_str());
    Ok(())
}

pub fn set(value: &str) -> Result<()> {
    let pref = ThemePreference::from_str(value)
        .ok_or_else(|| anyhow!("invalid theme {value:?}, expected \"dark\" or \"light\""))?;
    let mut manager = manager()?;
    manager.set(pref)?;
    println!("Theme set to {}", pref.as_str());
    Ok(())
}

pub fn toggle() -> Result<()> {
    let mut manager = manager()?;
    manager.toggle()?;
    println!("Theme set to {}", manager.preference().as_str());
    Ok(())
}
