use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn get_simply_path_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".simply-path"))
}

pub fn get_board_path() -> Result<PathBuf> {
    let data_dir = get_simply_path_dir()?;
    Ok(data_dir.join("board.json"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let data_dir = get_simply_path_dir()?;
    Ok(data_dir.join("config.toml"))
}

pub fn get_ui_cache_path() -> Result<PathBuf> {
    let data_dir = get_simply_path_dir()?;
    Ok(data_dir.join("ui_cache.json"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    let data_dir = get_simply_path_dir()?;
    Ok(data_dir.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    let data_dir = get_simply_path_dir()?;
    Ok(data_dir.join("crash.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_simply_path_dir() {
        let dir = get_simply_path_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".simply-path"));
    }

    #[test]
    fn test_get_board_path() {
        let path = get_board_path().unwrap();
        assert!(path.to_string_lossy().contains(".simply-path"));
        assert!(path.to_string_lossy().ends_with("board.json"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_get_ui_cache_path() {
        let path = get_ui_cache_path().unwrap();
        assert!(path.to_string_lossy().ends_with("ui_cache.json"));
    }

    #[test]
    fn test_get_logs_dir() {
        let dir = get_logs_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".simply-path"));
        assert!(dir.to_string_lossy().ends_with("logs"));
    }

    #[test]
    fn test_get_crash_log_path() {
        let path = get_crash_log_path().unwrap();
        assert!(path.to_string_lossy().ends_with("crash.log"));
    }
}
