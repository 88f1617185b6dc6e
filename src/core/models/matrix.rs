//! Tasks grouped by quadrant

use serde::Serialize;

use super::{Quadrant, Task};

/// The 2x2 matrix view: one list per quadrant
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuadrantMatrix {
    /// Important and urgent
    #[serde(rename = "do")]
    pub do_now: Vec<Task>,
    /// Important, not urgent
    pub decide: Vec<Task>,
    /// Urgent, not important
    pub delegate: Vec<Task>,
    /// Neither
    pub delete: Vec<Task>,
}

impl QuadrantMatrix {
    /// Tasks in one quadrant
    #[must_use]
    pub fn get(&self, quadrant: Quadrant) -> &[Task] {
        match quadrant {
            Quadrant::Do => &self.do_now,
            Quadrant::Decide => &self.decide,
            Quadrant::Delegate => &self.delegate,
            Quadrant::Delete => &self.delete,
        }
    }

    /// Append a task to its quadrant
    pub fn push(&mut self, task: Task) {
        let cell = match task.quadrant() {
            Quadrant::Do => &mut self.do_now,
            Quadrant::Decide => &mut self.decide,
            Quadrant::Delegate => &mut self.delegate,
            Quadrant::Delete => &mut self.delete,
        };
        cell.push(task);
    }
}
