//! Ephemeral progress through a learning path. Nothing here is persisted.

use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::{LearningPath, Topic};
use crate::error::PathError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicState<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub completed: bool,
    pub locked: bool,
}

#[derive(Debug, Clone)]
pub struct PathProgress<'a> {
    path: &'a LearningPath,
    completed: HashSet<&'a str>,
}

impl<'a> PathProgress<'a> {
    pub fn new(path: &'a LearningPath) -> Self {
        PathProgress {
            path,
            completed: HashSet::new(),
        }
    }

    pub fn path(&self) -> &'a LearningPath {
        self.path
    }

    pub fn is_completed(&self, topic_id: &str) -> bool {
        self.completed.contains(topic_id)
    }

    /// First prerequisite of `topic` that is still open.
    fn missing_prerequisite(&self, topic: &'a Topic) -> Option<&'a str> {
        topic
            .prerequisites
            .iter()
            .map(String::as_str)
            .find(|pre| !self.completed.contains(pre))
    }

    pub fn is_unlocked(&self, topic: &'a Topic) -> bool {
        self.missing_prerequisite(topic).is_none()
    }

    pub fn complete(&mut self, topic_id: &str) -> Result<(), PathError> {
        let topic = self
            .path
            .topic(topic_id)
            .ok_or_else(|| PathError::UnknownTopic(topic_id.to_string()))?;
        if let Some(missing) = self.missing_prerequisite(topic) {
            return Err(PathError::Locked {
                topic: topic.id.clone(),
                missing: missing.to_string(),
            });
        }
        self.completed.insert(topic.id.as_str());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }

    pub fn topic_states(&self) -> Vec<TopicState<'a>> {
        self.path
            .topics
            .iter()
            .map(|t| TopicState {
                id: &t.id,
                title: &t.title,
                completed: self.is_completed(&t.id),
                locked: !self.is_unlocked(t),
            })
            .collect()
    }

    /// Whole-number percentage of topics completed.
    pub fn percent_complete(&self) -> u32 {
        let total = self.path.topics.len();
        if total == 0 {
            return 100;
        }
        (self.completed.len() * 100 / total) as u32
    }
}
