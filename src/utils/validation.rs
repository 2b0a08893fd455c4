use crate::utils::error::{InstallError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    // 只支援 ~ 與 ~/...，~user 不會被展開
    if path.starts_with('~') && path != "~" && !path.starts_with("~/") {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "~user paths are not supported; use ~/ or an absolute path".to_string(),
        });
    }

    Ok(())
}

pub fn validate_prefix(field_name: &str, prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// 名稱必須是單純檔名，不可包含路徑分隔符
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Not a file name".to_string(),
        });
    }

    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File names cannot contain path separators".to_string(),
        });
    }

    Ok(())
}
