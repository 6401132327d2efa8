use super::Task;

/// 列表过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// 所有过滤条件（Tab 顺序）
    pub fn all() -> &'static [TaskFilter] {
        &[TaskFilter::All, TaskFilter::Active, TaskFilter::Completed]
    }

    /// 切换到下一个（循环）
    pub fn next(&self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Active,
            TaskFilter::Active => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::All,
        }
    }

    /// 切换到上一个（循环）
    pub fn prev(&self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Completed,
            TaskFilter::Active => TaskFilter::All,
            TaskFilter::Completed => TaskFilter::Active,
        }
    }

    /// Tab 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    /// 配置文件中使用的名称
    pub fn name(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        }
    }

    /// 从名称解析（忽略大小写），未知名称回退到 All
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "active" => TaskFilter::Active,
            "completed" | "done" => TaskFilter::Completed,
            _ => TaskFilter::All,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.is_completed(),
            TaskFilter::Completed => task.is_completed(),
        }
    }
}
