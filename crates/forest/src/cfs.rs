//! Completely-fair-scheduler simulator.
//!
//! Runnable tasks are ordered on a red-black timeline by virtual runtime;
//! the leftmost node is cached so picking the next task is O(1).

use std::collections::HashMap;

use algokit_util::from_ordering;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::ForestError;
use crate::red_black::RbTree;

/// Weight of each nice level from -20 to 19; nice 0 maps to 1024 and every
/// step changes the CPU share by roughly 10%.
const SCHED_PRIO_TO_WEIGHT: [u32; 40] = [
    88761, 71755, 56483, 46273, 36291, 29154, 23254, 18705, 14949, 11916, 9548, 7620, 6100, 4904,
    3906, 3121, 2501, 1991, 1586, 1277, 1024, 820, 655, 526, 423, 335, 272, 215, 172, 137, 110, 87,
    70, 56, 45, 36, 29, 23, 18, 15,
];

pub const MIN_NICE: i32 = -20;
pub const MAX_NICE: i32 = 19;

/// Load weight for a nice level, `None` outside `-20..=19`.
pub fn nice_to_weight(nice: i32) -> Option<u32> {
    if !(MIN_NICE..=MAX_NICE).contains(&nice) {
        return None;
    }
    SCHED_PRIO_TO_WEIGHT.get((nice - MIN_NICE) as usize).copied()
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Weight whose virtual runtime advances at wall-clock speed.
    pub reference_weight: f64,
    /// Smallest slice handed out by [`CfsScheduler::run`].
    pub min_granularity: f64,
    /// Upper bound on runnable tasks; `None` is unlimited.
    pub max_tasks: Option<usize>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            reference_weight: 1024.0,
            min_granularity: 0.75,
            max_tasks: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub pid: u32,
    /// Nice level.
    pub priority: i32,
    pub vruntime: f64,
    pub sum_exec_runtime: f64,
    pub weight: f64,
}

impl Task {
    pub fn new(pid: u32, priority: i32) -> Result<Self, ForestError> {
        let weight = nice_to_weight(priority).ok_or(ForestError::InvalidArgument("nice level out of range"))?;
        Ok(Self {
            pid,
            priority,
            vruntime: 0.0,
            sum_exec_runtime: 0.0,
            weight: f64::from(weight),
        })
    }

    pub fn with_vruntime(mut self, vruntime: f64) -> Self {
        self.vruntime = vruntime;
        self
    }
}

type TimelineKey = (f64, u32);

fn timeline_order(a: &TimelineKey, b: &TimelineKey) -> i32 {
    from_ordering(a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
}

struct Entry {
    task: Task,
    node: u32,
}

pub struct CfsScheduler {
    config: SchedulerConfig,
    timeline: RbTree<TimelineKey, fn(&TimelineKey, &TimelineKey) -> i32>,
    tasks: HashMap<u32, Entry>,
    leftmost: Option<u32>,
}

impl Default for CfsScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl CfsScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            timeline: RbTree::with_comparator(timeline_order as fn(&TimelineKey, &TimelineKey) -> i32),
            tasks: HashMap::new(),
            leftmost: None,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, pid: u32) -> Option<&Task> {
        self.tasks.get(&pid).map(|e| &e.task)
    }

    /// Enqueues a runnable task at its current virtual runtime.
    pub fn add_task(&mut self, task: Task) -> Result<(), ForestError> {
        if self.tasks.contains_key(&task.pid) {
            return Err(ForestError::DuplicateTask(task.pid));
        }
        if self.config.max_tasks.is_some_and(|max| self.tasks.len() >= max) {
            return Err(ForestError::InvalidArgument("scheduler is full"));
        }
        if !task.vruntime.is_finite() {
            return Err(ForestError::InvalidArgument("vruntime must be finite"));
        }
        self.enqueue(task);
        Ok(())
    }

    fn enqueue(&mut self, task: Task) {
        let key = (task.vruntime, task.pid);
        // (vruntime, pid) is unique because pids are.
        let Some(node) = self.timeline.insert(key) else {
            return;
        };
        let is_leftmost = match self.leftmost {
            Some(l) => timeline_order(&key, self.timeline.key(l)) < 0,
            None => true,
        };
        if is_leftmost {
            self.leftmost = Some(node);
        }
        debug!(pid = task.pid, vruntime = task.vruntime, "enqueue");
        self.tasks.insert(task.pid, Entry { task, node });
    }

    /// Dequeues the task with `pid` and hands it back.
    pub fn remove_task(&mut self, pid: u32) -> Result<Task, ForestError> {
        let entry = self.tasks.remove(&pid).ok_or(ForestError::UnknownTask(pid))?;
        if self.leftmost == Some(entry.node) {
            self.leftmost = self.timeline.next(entry.node);
        }
        self.timeline.remove_index(entry.node);
        debug!(pid, vruntime = entry.task.vruntime, "dequeue");
        Ok(entry.task)
    }

    /// Task with the smallest virtual runtime, ties broken by pid.
    pub fn pick_next_task(&self) -> Option<&Task> {
        let node = self.leftmost?;
        let (_, pid) = self.timeline.key(node);
        trace!(pid, "pick");
        self.task(*pid)
    }

    pub fn min_vruntime(&self) -> Option<f64> {
        self.leftmost.map(|n| self.timeline.key(n).0)
    }

    /// Charges `delta` of wall-clock runtime to `pid` and repositions it.
    ///
    /// Virtual runtime grows by `delta * reference_weight / weight`, so
    /// heavier tasks advance more slowly.
    pub fn update_task_runtime(&mut self, pid: u32, delta: f64) -> Result<(), ForestError> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(ForestError::InvalidArgument("runtime delta must be finite and non-negative"));
        }
        let mut task = self.remove_task(pid)?;
        task.vruntime += delta * (self.config.reference_weight / task.weight);
        task.sum_exec_runtime += delta;
        debug!(pid, vruntime = task.vruntime, delta, "update runtime");
        self.enqueue(task);
        Ok(())
    }

    /// Simulates `total` units of CPU time, always running the leftmost
    /// task for one slice of at least `min_granularity`. Returns the pid run
    /// in each slice.
    pub fn run(&mut self, total: f64, slice: f64) -> Result<Vec<u32>, ForestError> {
        if !(slice.is_finite() && slice > 0.0) || !total.is_finite() {
            return Err(ForestError::InvalidArgument("slice and total must be finite, slice positive"));
        }
        let slice = slice.max(self.config.min_granularity);
        let mut remaining = total;
        let mut ran = Vec::new();
        while remaining > 0.0 {
            let Some(pid) = self.pick_next_task().map(|t| t.pid) else {
                break;
            };
            let charge = slice.min(remaining);
            self.update_task_runtime(pid, charge)?;
            ran.push(pid);
            remaining -= charge;
        }
        Ok(ran)
    }

    /// Runnable pids in timeline order.
    pub fn timeline(&self) -> Vec<u32> {
        self.timeline.iter().map(|&(_, pid)| pid).collect()
    }

    pub fn is_valid(&self) -> bool {
        self.timeline.is_valid()
            && self.timeline.len() == self.tasks.len()
            && self.leftmost == self.timeline.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_zero_weighs_reference() {
        assert_eq!(nice_to_weight(0), Some(1024));
        assert_eq!(nice_to_weight(-20), Some(88761));
        assert_eq!(nice_to_weight(19), Some(15));
        assert_eq!(nice_to_weight(20), None);
    }

    #[test]
    fn leftmost_moves_to_successor() {
        let mut cfs = CfsScheduler::default();
        for (pid, v) in [(1, 5.0), (2, 1.0), (3, 3.0)] {
            cfs.add_task(Task::new(pid, 0).unwrap().with_vruntime(v)).unwrap();
        }
        assert_eq!(cfs.pick_next_task().map(|t| t.pid), Some(2));
        cfs.remove_task(2).unwrap();
        assert_eq!(cfs.pick_next_task().map(|t| t.pid), Some(3));
        assert!(cfs.is_valid());
    }
}
