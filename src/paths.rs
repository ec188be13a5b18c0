use std::path::Path;

/// Strips the final extension. Only a dot inside the file name counts, so
/// `./captures/finger` is returned as-is.
pub fn base_path(file_path: &str) -> String {
    let name_start = file_path.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
    match file_path[name_start..].rfind('.') {
        Some(dot) => file_path[..name_start + dot].to_owned(),
        None => file_path.to_owned(),
    }
}

pub fn log_path_for(image_path: &str) -> String {
    format!("{}.log", base_path(image_path))
}

/// The companion log next to the image, if there is one on disk.
pub fn auto_log_path(image_path: &str) -> Option<String> {
    let candidate = log_path_for(image_path);
    if Path::new(&candidate).is_file() {
        info!("Found companion log file: {}", candidate);
        Some(candidate)
    } else {
        None
    }
}

pub fn preview_paths(base: &str, scale: u32) -> (String, String) {
    (
        format!("{}_x{}.png", base, scale),
        format!("{}_enhanced_x{}.png", base, scale),
    )
}

pub fn file_name(file_path: &str) -> String {
    Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_owned())
}
