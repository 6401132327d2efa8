//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),
        bg_secondary: Color::Rgb(48, 48, 48),
        highlight: Color::Rgb(0, 255, 136), // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        done: Color::Rgb(0, 200, 110),
        pending: Color::Rgb(100, 181, 246),
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(0, 255, 136),
        warning: Color::Rgb(255, 213, 79),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        highlight: Color::Rgb(0, 128, 68), // 深绿色
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(0, 150, 80),
        pending: Color::Rgb(33, 150, 243),
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(0, 128, 68),
        warning: Color::Rgb(255, 152, 0),
    }
}

/// Dracula
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),
        bg_secondary: Color::Rgb(68, 71, 90),
        highlight: Color::Rgb(189, 147, 249), // purple
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164),
        border: Color::Rgb(68, 71, 90),
        done: Color::Rgb(80, 250, 123),
        pending: Color::Rgb(139, 233, 253),
        tab_active_fg: Color::Rgb(40, 42, 54),
        tab_active_bg: Color::Rgb(189, 147, 249),
        warning: Color::Rgb(241, 250, 140),
    }
}

/// Nord
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(59, 66, 82),
        highlight: Color::Rgb(136, 192, 208), // frost
        text: Color::Rgb(236, 239, 244),
        muted: Color::Rgb(127, 137, 156),
        border: Color::Rgb(76, 86, 106),
        done: Color::Rgb(163, 190, 140),
        pending: Color::Rgb(129, 161, 193),
        tab_active_fg: Color::Rgb(46, 52, 64),
        tab_active_bg: Color::Rgb(136, 192, 208),
        warning: Color::Rgb(235, 203, 139),
    }
}
