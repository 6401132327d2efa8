//! 终端深浅色检测

use std::process::Command;

/// 检测系统 / 终端是否为深色
///
/// 优先读取 `COLORFGBG`（xterm 系终端设置，格式 "fg;bg"），
/// 其次在 macOS 上读取 AppleInterfaceStyle。都拿不到时按深色处理。
pub fn detect_system_theme() -> bool {
    if let Ok(value) = std::env::var("COLORFGBG") {
        if let Some(dark) = parse_colorfgbg(&value) {
            return dark;
        }
    }

    if cfg!(target_os = "macos") {
        return Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout)
                        .trim()
                        .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(false);
    }

    true
}

/// 背景色编号 0-6 或 8 视为深色
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("12;default;8"), Some(true));
        assert_eq!(parse_colorfgbg("garbage"), None);
    }

    #[test]
    fn test_detect_system_theme() {
        // 只是确保函数不会 panic
        let _is_dark = detect_system_theme();
    }
}
