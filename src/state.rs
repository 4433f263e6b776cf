use std::collections::VecDeque;

/// Pops from the front until `queue` is below `capacity`. Returns how many
/// entries were dropped.
fn evict_oldest<T>(queue: &mut VecDeque<T>, capacity: usize) -> usize {
    let mut evicted = 0;
    while queue.len() >= capacity && queue.pop_front().is_some() {
        evicted += 1;
    }
    evicted
}

/// The lines shown in the log panel, oldest first. Each line is already
/// wrapped in its severity color.
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `line`, first evicting the oldest lines so the buffer never
    /// holds more than `capacity` entries. With a capacity of zero the line is
    /// dropped.
    pub fn append(&mut self, line: String, capacity: usize) {
        let evicted = evict_oldest(&mut self.lines, capacity);
        if evicted > 0 {
            log::debug!("evicted {evicted} log line(s), capacity {capacity}");
        }
        if capacity > 0 {
            self.lines.push_back(line);
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One named task in the progress panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    task: String,
    percent: f64,
}

impl ProgressEntry {
    pub fn new(task: impl Into<String>, percent: f64) -> Self {
        Self {
            task: task.into(),
            percent,
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent == 100.0
    }
}

/// Named progress entries in insertion order, at most one per task.
#[derive(Debug, Default)]
pub struct ProgressRegistry {
    entries: VecDeque<ProgressEntry>,
}

impl ProgressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `percent` for `task`.
    ///
    /// Completed entries are pruned first, then the oldest entries are evicted
    /// until there is room under `capacity`. An existing entry for `task` keeps
    /// its position; otherwise a new entry goes to the end.
    pub fn upsert(&mut self, task: &str, percent: f64, capacity: usize) {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.is_complete());
        let pruned = before - self.entries.len();
        if pruned > 0 {
            log::debug!("pruned {pruned} completed task(s)");
        }

        let evicted = evict_oldest(&mut self.entries, capacity);
        if evicted > 0 {
            log::debug!("evicted {evicted} progress entries, capacity {capacity}");
        }

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.task == task) {
            entry.percent = percent;
        } else if capacity > 0 {
            self.entries.push_back(ProgressEntry::new(task, percent));
        }
    }

    pub fn get(&self, index: usize) -> Option<&ProgressEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, task: &str) -> Option<&ProgressEntry> {
        self.entries.iter().find(|entry| entry.task == task)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProgressEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
