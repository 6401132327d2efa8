//! 行式交互 Shell
//!
//! 读取菜单选项和参数，调用 `TaskStore`，打印结果。
//! 输入校验（空描述、非数字 ID）都在这里完成，不合法时不会调用 store。

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::model::{Task, TaskFilter, TaskId, TaskStore};

const WELCOME: &str = "Welcome to ToDo List Application";
const GOODBYE: &str = "Thank you for using ToDo List Application. Goodbye!";

/// 菜单选项 (1-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    ViewActive,
    ViewCompleted,
    MarkCompleted,
    MarkNotCompleted,
    Remove,
    Exit,
}

impl MenuChoice {
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Add,
            MenuChoice::ViewAll,
            MenuChoice::ViewActive,
            MenuChoice::ViewCompleted,
            MenuChoice::MarkCompleted,
            MenuChoice::MarkNotCompleted,
            MenuChoice::Remove,
            MenuChoice::Exit,
        ]
    }

    /// 菜单序号
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::ViewAll => 2,
            MenuChoice::ViewActive => 3,
            MenuChoice::ViewCompleted => 4,
            MenuChoice::MarkCompleted => 5,
            MenuChoice::MarkNotCompleted => 6,
            MenuChoice::Remove => 7,
            MenuChoice::Exit => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add new task",
            MenuChoice::ViewAll => "View all tasks",
            MenuChoice::ViewActive => "View active tasks",
            MenuChoice::ViewCompleted => "View completed tasks",
            MenuChoice::MarkCompleted => "Mark task as completed",
            MenuChoice::MarkNotCompleted => "Mark task as not completed",
            MenuChoice::Remove => "Remove task",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// 解析菜单选项
pub fn parse_choice(input: &str) -> Result<MenuChoice> {
    let number: u8 = input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidChoice(input.trim().to_string()))?;
    MenuChoice::all()
        .iter()
        .copied()
        .find(|c| c.number() == number)
        .ok_or_else(|| AppError::InvalidChoice(number.to_string()))
}

/// 解析任务 ID
pub fn parse_task_id(input: &str) -> Result<TaskId> {
    input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidId(input.trim().to_string()))
}

/// 校验任务描述非空（只检查，不修改原文）
pub fn validate_description(input: &str) -> Result<&str> {
    if input.trim().is_empty() {
        return Err(AppError::EmptyDescription);
    }
    Ok(input)
}

/// 交互 Shell，持有 store 的可变借用
pub struct Shell<'a, R, W> {
    store: &'a mut TaskStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a mut TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// 主循环，直到选择 Exit 或输入结束
    pub fn run(&mut self) -> Result<()> {
        info!("shell session started");
        writeln!(self.output, "{}", WELCOME)?;

        loop {
            self.display_menu()?;
            let Some(line) = self.read_line()? else {
                // EOF 视为退出
                writeln!(self.output)?;
                writeln!(self.output, "{}", GOODBYE)?;
                break;
            };

            match parse_choice(&line) {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "{}", GOODBYE)?;
                    break;
                }
                Ok(choice) => self.dispatch(choice)?,
                Err(e) => {
                    debug!("rejected menu input: {}", e);
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }

        info!(tasks = self.store.len(), "shell session ended");
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => self.add_task(),
            MenuChoice::ViewAll => self.view_tasks("All Tasks", TaskFilter::All),
            MenuChoice::ViewActive => self.view_tasks("Active Tasks", TaskFilter::Active),
            MenuChoice::ViewCompleted => self.view_tasks("Completed Tasks", TaskFilter::Completed),
            MenuChoice::MarkCompleted => self.set_completed(true),
            MenuChoice::MarkNotCompleted => self.set_completed(false),
            MenuChoice::Remove => self.remove_task(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== ToDo List Menu =====")?;
        for choice in MenuChoice::all() {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        self.prompt("Enter your choice: ")
    }

    fn add_task(&mut self) -> Result<()> {
        self.prompt("Enter task description: ")?;
        let line = self.read_line()?.unwrap_or_default();

        match validate_description(&line) {
            Ok(description) => {
                let task = self.store.create(description);
                debug!(id = task.id(), "task created");
                writeln!(self.output, "Task added: {}", task)?;
            }
            Err(e) => writeln!(self.output, "{}.", e)?,
        }
        Ok(())
    }

    fn view_tasks(&mut self, title: &str, filter: TaskFilter) -> Result<()> {
        let tasks = self.store.list(filter);
        write_tasks(&mut self.output, title, &tasks)
    }

    fn set_completed(&mut self, completed: bool) -> Result<()> {
        let prompt = if completed {
            "Enter the ID of the task to mark as completed: "
        } else {
            "Enter the ID of the task to mark as not completed: "
        };
        let Some(id) = self.prompt_for_id(prompt)? else {
            return Ok(());
        };

        let found = if completed {
            self.store.mark_completed(id)
        } else {
            self.store.mark_not_completed(id)
        };
        if found {
            debug!(id, completed, "task updated");
            if completed {
                writeln!(self.output, "Task marked as completed.")?;
            } else {
                writeln!(self.output, "Task marked as not completed.")?;
            }
        } else {
            writeln!(self.output, "No task found with ID {}.", id)?;
        }
        Ok(())
    }

    fn remove_task(&mut self) -> Result<()> {
        let Some(id) = self.prompt_for_id("Enter the ID of the task to remove: ")? else {
            return Ok(());
        };

        if self.store.remove(id) {
            debug!(id, "task removed");
            writeln!(self.output, "Task removed.")?;
        } else {
            writeln!(self.output, "No task found with ID {}.", id)?;
        }
        Ok(())
    }

    /// 读取 ID，格式错误时打印提示并返回 None
    fn prompt_for_id(&mut self, prompt: &str) -> Result<Option<TaskId>> {
        self.prompt(prompt)?;
        let line = self.read_line()?.unwrap_or_default();
        match parse_task_id(&line) {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid ID format.")?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// 读取一行（去掉行尾换行），EOF 返回 None
    ///
    /// 非 UTF-8 字节按替换字符处理，交给后续解析当作无效输入。
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// 打印任务列表
fn write_tasks<W: Write>(output: &mut W, title: &str, tasks: &[Task]) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "===== {} =====", title)?;
    if tasks.is_empty() {
        writeln!(output, "No tasks found.")?;
        return Ok(());
    }
    for task in tasks {
        writeln!(output, "{}", task)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(store: &mut TaskStore, script: &str) -> String {
        run_bytes(store, script.as_bytes())
    }

    fn run_bytes(store: &mut TaskStore, input: &[u8]) -> String {
        let mut output = Vec::new();
        Shell::new(store, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1").unwrap(), MenuChoice::Add);
        assert_eq!(parse_choice(" 8 ").unwrap(), MenuChoice::Exit);
        assert!(matches!(parse_choice("9"), Err(AppError::InvalidChoice(_))));
        assert!(matches!(parse_choice("0"), Err(AppError::InvalidChoice(_))));
        assert!(matches!(parse_choice("add"), Err(AppError::InvalidChoice(_))));
        assert!(matches!(parse_choice(""), Err(AppError::InvalidChoice(_))));
    }

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("42").unwrap(), 42);
        assert_eq!(parse_task_id(" 7\t").unwrap(), 7);
        assert!(matches!(parse_task_id("abc"), Err(AppError::InvalidId(_))));
        assert_eq!(parse_task_id("-1").unwrap(), -1);
        assert!(matches!(parse_task_id("1.5"), Err(AppError::InvalidId(_))));
    }

    #[test]
    fn test_validate_description() {
        assert_eq!(validate_description("  Buy milk ").unwrap(), "  Buy milk ");
        assert!(matches!(
            validate_description("   "),
            Err(AppError::EmptyDescription)
        ));
    }

    #[test]
    fn test_add_and_view() {
        let mut store = TaskStore::new();
        let out = run_script(&mut store, "1\nBuy milk\n1\nWalk dog\n5\n1\n4\n3\n8\n");

        assert!(out.starts_with(WELCOME));
        assert!(out.contains("Task added: [1] [ ] Buy milk"));
        assert!(out.contains("Task added: [2] [ ] Walk dog"));
        assert!(out.contains("Task marked as completed."));
        assert!(out.contains("===== Completed Tasks =====\n[1] [✓] Buy milk\n"));
        assert!(out.contains("===== Active Tasks =====\n[2] [ ] Walk dog\n"));
        assert!(out.trim_end().ends_with(GOODBYE));

        assert_eq!(store.len(), 2);
        assert!(store.find_by_id(1).unwrap().is_completed());
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut store = TaskStore::new();
        let out = run_script(&mut store, "1\n   \n8\n");

        assert!(out.contains("Task description cannot be empty."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_inputs() {
        let mut store = TaskStore::new();
        let out = run_script(&mut store, "abc\n42\n7\nxyz\n5\n99\n8\n");

        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
        assert!(out.contains("Invalid ID format."));
        assert!(out.contains("No task found with ID 99."));
    }

    #[test]
    fn test_mark_not_completed_and_remove() {
        let mut store = TaskStore::new();
        store.create("Buy milk");
        store.mark_completed(1);

        let out = run_script(&mut store, "6\n1\n7\n1\n7\n1\n2\n8\n");

        assert!(out.contains("Task marked as not completed."));
        assert!(out.contains("Task removed."));
        assert!(out.contains("No task found with ID 1."));
        assert!(out.contains("===== All Tasks =====\nNo tasks found.\n"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_negative_id_reports_not_found() {
        let mut store = TaskStore::new();
        store.create("Buy milk");
        let out = run_script(&mut store, "7\n-5\n5\n-1\n8\n");

        assert!(out.contains("No task found with ID -5."));
        assert!(out.contains("No task found with ID -1."));
        assert!(!out.contains("Invalid ID format."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_non_utf8_line_is_invalid_choice() {
        let mut store = TaskStore::new();
        let out = run_bytes(&mut store, b"\xff\n1\nBuy milk\n8\n");

        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains("Task added: [1] [ ] Buy milk"));
        assert!(out.trim_end().ends_with(GOODBYE));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_non_utf8_id_is_invalid_format() {
        let mut store = TaskStore::new();
        store.create("Buy milk");
        let out = run_bytes(&mut store, b"7\n\xfe1\n8\n");

        assert!(out.contains("Invalid ID format."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let mut store = TaskStore::new();
        let out = run_script(&mut store, "1\nBuy milk\n");

        assert!(out.trim_end().ends_with(GOODBYE));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_menu_lists_all_choices() {
        let mut store = TaskStore::new();
        let out = run_script(&mut store, "8\n");

        for choice in MenuChoice::all() {
            assert!(out.contains(&format!("{}. {}", choice.number(), choice.label())));
        }
        assert!(out.contains("Enter your choice: "));
    }
}
