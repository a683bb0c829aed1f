use once_cell::sync::Lazy;
use regex::Regex;

use crate::storage::local_fs::{MAX_STORED_NAME_BYTES, STORED_NAME_PREFIX_BYTES};

static FILE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[^\x00-\x1f/\\:*?"<>|]+$"#).expect("Invalid file name regex")
});

static RESOURCE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("Invalid resource link regex"));

const MAX_TITLE_LENGTH: usize = 200;

/// 规范化文件名
///
/// 只保留路径中的最后一段；为空时回退到 `default_name`。
/// 长度按字节计算，并为磁盘上的 `{uuid}_` 前缀留出空间。
pub fn sanitize_file_name(
    raw: &str,
    default_name: &str,
    max_length: usize,
) -> Result<String, &'static str> {
    let last = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let name = if last.is_empty() { default_name } else { last };

    if name == "." || name == ".." {
        return Err("File name must not be a relative path segment");
    }
    let max_bytes = max_length.min(MAX_STORED_NAME_BYTES - STORED_NAME_PREFIX_BYTES);
    if name.len() > max_bytes {
        return Err("File name is too long");
    }
    if !FILE_NAME_RE.is_match(name) {
        return Err("File name contains invalid characters");
    }
    Ok(name.to_string())
}

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Title must not be empty");
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err("Title must be at most 200 characters");
    }
    Ok(())
}

pub fn validate_resource_link(link: &str) -> Result<(), &'static str> {
    // 资源链接只接受 http(s) 地址
    if !RESOURCE_LINK_RE.is_match(link) {
        return Err("Resource link must be an http(s) URL");
    }
    Ok(())
}
