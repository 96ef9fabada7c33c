use std::collections::{vec_deque, VecDeque};

use serde_derive::{Deserialize, Serialize};

use crate::graphs::Distance;

/// Route between two vertices, stored as the labels of the visited vertices
/// from source to target, together with the summed weight of the traversed
/// edges.
///
/// A returned path belongs to the caller; the search that produced it keeps
/// no reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    labels: VecDeque<String>,
    weight: Distance,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    pub fn with_weight(weight: Distance) -> Path {
        Path {
            labels: VecDeque::new(),
            weight,
        }
    }

    pub fn push_front(&mut self, label: &str) {
        self.labels.push_front(label.to_string());
    }

    pub fn push_back(&mut self, label: &str) {
        self.labels.push_back(label.to_string());
    }

    pub fn pop_front(&mut self) -> Option<String> {
        self.labels.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<String> {
        self.labels.pop_back()
    }

    pub fn front(&self) -> Option<&str> {
        self.labels.front().map(String::as_str)
    }

    pub fn back(&self) -> Option<&str> {
        self.labels.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|other| other == label)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn weight(&self) -> Distance {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Distance) {
        self.weight = weight;
    }
}

impl IntoIterator for Path {
    type Item = String;
    type IntoIter = vec_deque::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = vec_deque::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
