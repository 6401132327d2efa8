use std::fmt;

/// 任务 ID；与输入端一致使用有符号整数，负数只会查不到
pub type TaskId = i64;

/// 完成标记
pub const CHECK_MARK: &str = "✓";

/// 单个任务
///
/// 字段只读：所有修改都必须经过 [`TaskStore`](super::TaskStore)，
/// 保证 store 是唯一的数据来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    completed: bool,
}

impl Task {
    /// 新建任务，默认未完成
    pub(super) fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// 完成状态对应的标记（完成为 ✓，否则为空格）
    pub fn mark(&self) -> &'static str {
        if self.completed {
            CHECK_MARK
        } else {
            " "
        }
    }

    pub(super) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub(super) fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl fmt::Display for Task {
    /// 格式: `[<id>] [<mark>] <description>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.id, self.mark(), self.description)
    }
}
