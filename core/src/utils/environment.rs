use std::env::var;

/// Get the `SystemDrive` for Windows. Defaults to `C:` when the variable is absent
pub(crate) fn get_systemdrive() -> String {
    match var("SystemDrive") {
        Ok(value) if !value.is_empty() => value,
        _ => String::from("C:"),
    }
}

/// Default Prefetch directory
pub(crate) fn prefetch_directory() -> String {
    format!("{}\\Windows\\Prefetch", get_systemdrive())
}

#[cfg(test)]
mod tests {
    use super::{get_systemdrive, prefetch_directory};

    #[test]
    fn test_get_systemdrive() {
        let drive = get_systemdrive();
        assert!(drive.ends_with(':'));
    }

    #[test]
    fn test_prefetch_directory() {
        assert!(prefetch_directory().ends_with(":\\Windows\\Prefetch"));
    }
}
