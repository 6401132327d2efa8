//! 任务集合管理
//!
//! `TaskStore` 持有全部任务和自增 ID 序列，是任务数据唯一的修改入口。
//! 找不到 ID 是正常结果：以 `false` / `None` 返回，不会报错。

use super::{Task, TaskFilter, TaskId};

/// 各过滤条件下的任务数量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskCounts {
    /// 指定过滤条件下的数量
    pub fn get(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.total,
            TaskFilter::Active => self.active,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// 内存中的任务集合
///
/// 任务按插入顺序保存。`next_id` 从 1 开始，每次成功创建加一，
/// 删除任务后也不会复用 ID。
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// 创建任务并追加到末尾
    ///
    /// 不校验描述内容，空描述的拒绝由调用方负责。
    pub fn create(&mut self, description: impl Into<String>) -> Task {
        let task = Task::new(self.next_id, description);
        // i64 范围内实际不可能耗尽，饱和加法保证 create 永不 panic
        self.next_id = self.next_id.saturating_add(1);
        self.tasks.push(task.clone());
        task
    }

    /// 删除任务，返回是否找到
    pub fn remove(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(index) => {
                // Vec::remove 保持其余任务的相对顺序
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// 设置完成状态（幂等），返回是否找到
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.set_completed(completed);
                true
            }
            None => false,
        }
    }

    pub fn mark_completed(&mut self, id: TaskId) -> bool {
        self.set_completed(id, true)
    }

    pub fn mark_not_completed(&mut self, id: TaskId) -> bool {
        self.set_completed(id, false)
    }

    /// 修改任务描述，返回是否找到
    pub fn set_description(&mut self, id: TaskId, description: impl Into<String>) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.set_description(description);
                true
            }
            None => false,
        }
    }

    pub fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// 所有任务的快照（插入顺序）
    pub fn list_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn list_completed(&self) -> Vec<Task> {
        self.filtered(TaskFilter::Completed)
    }

    pub fn list_active(&self) -> Vec<Task> {
        self.filtered(TaskFilter::Active)
    }

    /// 按过滤条件返回快照
    pub fn list(&self, filter: TaskFilter) -> Vec<Task> {
        match filter {
            TaskFilter::All => self.list_all(),
            TaskFilter::Active => self.list_active(),
            TaskFilter::Completed => self.list_completed(),
        }
    }

    fn filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.is_completed()).count();
        TaskCounts {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    #[cfg(test)]
    fn with_next_id(next_id: TaskId) -> Self {
        Self {
            tasks: Vec::new(),
            next_id,
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id()).collect()
    }

    #[test]
    fn test_ids_increase_from_one() {
        let mut store = TaskStore::new();
        assert_eq!(store.create("a").id(), 1);
        assert_eq!(store.create("b").id(), 2);
        assert!(store.remove(2));
        assert_eq!(store.create("c").id(), 3);
        assert!(store.remove(1));
        assert!(store.remove(3));
        assert!(store.is_empty());
        assert_eq!(store.create("d").id(), 4);
    }

    #[test]
    fn test_removed_id_is_gone_and_not_reused() {
        let mut store = TaskStore::new();
        let task = store.create("Buy milk");
        assert!(store.remove(task.id()));
        assert!(store.find_by_id(task.id()).is_none());
        assert!(!store.remove(task.id()));

        let next = store.create("Walk dog");
        assert_ne!(next.id(), task.id());
    }

    #[test]
    fn test_filtered_lists_partition_all() {
        let mut store = TaskStore::new();
        for i in 0..6 {
            store.create(format!("task {}", i));
        }
        store.set_completed(2, true);
        store.set_completed(5, true);
        store.remove(4);

        let all = store.list_all();
        let completed = store.list_completed();
        let active = store.list_active();
        assert_eq!(all.len(), completed.len() + active.len());
        for task in &all {
            let in_completed = completed.contains(task);
            let in_active = active.contains(task);
            assert!(in_completed != in_active, "{} must be in exactly one list", task);
        }
        assert_eq!(ids(&completed), vec![2, 5]);
        assert_eq!(ids(&active), vec![1, 3, 6]);
    }

    #[test]
    fn test_complete_then_uncomplete_restores() {
        let mut store = TaskStore::new();
        let task = store.create("Buy milk");

        assert!(store.set_completed(task.id(), true));
        assert!(store.set_completed(task.id(), true));
        assert!(store.set_completed(task.id(), false));

        let found = store.find_by_id(task.id()).unwrap();
        assert_eq!(found, &task);
    }

    #[test]
    fn test_remove_missing_keeps_list() {
        let mut store = TaskStore::new();
        store.create("a");
        store.create("b");
        let before = store.list_all();

        assert!(!store.remove(42));
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = TaskStore::new();
        for name in ["a", "b", "c", "d"] {
            store.create(name);
        }
        assert!(store.remove(2));
        assert_eq!(ids(&store.list_all()), vec![1, 3, 4]);
    }

    #[test]
    fn test_missing_id_returns_false() {
        let mut store = TaskStore::new();
        assert!(!store.set_completed(1, true));
        assert!(!store.mark_not_completed(1));
        assert!(!store.set_description(1, "x"));
        assert!(store.find_by_id(1).is_none());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = TaskStore::new();
        store.create("a");

        let mut snapshot = store.list_all();
        snapshot.clear();
        assert_eq!(store.len(), 1);

        store.create("b");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_create_accepts_empty_description() {
        let mut store = TaskStore::new();
        let task = store.create("");
        assert_eq!(task.description(), "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_description() {
        let mut store = TaskStore::new();
        let task = store.create("Buy milk");
        store.mark_completed(task.id());

        assert!(store.set_description(task.id(), "Buy oat milk"));
        let found = store.find_by_id(task.id()).unwrap();
        assert_eq!(found.description(), "Buy oat milk");
        assert!(found.is_completed());
    }

    #[test]
    fn test_counts() {
        let mut store = TaskStore::new();
        store.create("a");
        store.create("b");
        store.create("c");
        store.mark_completed(2);

        let counts = store.counts();
        assert_eq!(
            counts,
            TaskCounts {
                total: 3,
                active: 2,
                completed: 1
            }
        );
        assert_eq!(counts.get(TaskFilter::Active), store.list_active().len());
    }

    #[test]
    fn test_milk_and_dog_scenario() {
        let mut store = TaskStore::new();

        let milk = store.create("Buy milk");
        assert_eq!(milk.id(), 1);
        assert!(!milk.is_completed());
        let dog = store.create("Walk dog");
        assert_eq!(dog.id(), 2);

        assert!(store.set_completed(1, true));

        let completed = store.list_completed();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id(), 1);
        assert_eq!(completed[0].description(), "Buy milk");
        assert!(completed[0].is_completed());

        let active = store.list_active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), 2);
        assert_eq!(active[0].description(), "Walk dog");
        assert!(!active[0].is_completed());

        assert!(store.remove(1));
        assert!(store.find_by_id(1).is_none());
        assert_eq!(ids(&store.list_all()), vec![2]);
    }

    #[test]
    fn test_negative_id_is_not_found() {
        let mut store = TaskStore::new();
        store.create("a");
        assert!(!store.remove(-5));
        assert!(!store.set_completed(-1, true));
        assert!(store.find_by_id(0).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_near_counter_limit_does_not_panic() {
        let mut store = TaskStore::with_next_id(TaskId::MAX - 1);
        assert_eq!(store.create("a").id(), TaskId::MAX - 1);
        assert_eq!(store.create("b").id(), TaskId::MAX);
        store.create("c");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_on_empty_store() {
        let mut store = TaskStore::new();
        assert!(!store.remove(99));
        assert!(store.list_all().is_empty());
    }
}
