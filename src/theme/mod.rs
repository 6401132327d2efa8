mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
    Nord,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Auto,
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
        ]
    }

    /// 切换到下一个主题（循环）
    pub fn next(&self) -> Self {
        let themes = Self::all();
        let index = themes.iter().position(|t| t == self).unwrap_or(0);
        themes[(index + 1) % themes.len()]
    }

    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行）
    pub bg_secondary: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务
    pub done: Color,
    /// 未完成任务的标记
    pub pending: Color,
    /// Tab 选中前景色
    pub tab_active_fg: Color,
    /// Tab 选中背景色
    pub tab_active_bg: Color,
    /// 警告色（删除确认）
    pub warning: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("Nord"), Theme::Nord);
        assert_eq!(Theme::from_name("dracula"), Theme::Dracula);
        assert_eq!(Theme::from_name("Solarized"), Theme::Auto);
    }

    #[test]
    fn test_next_cycles() {
        let mut theme = Theme::Auto;
        for _ in 0..Theme::all().len() {
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Auto);
    }
}
