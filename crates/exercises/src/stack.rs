//! Stacks that report their extrema in O(1).
//!
//! Each extremum has its own stack. A pushed value also goes onto the
//! minimum stack when it is `<=` the current minimum (`>=` for the maximum),
//! and a popped value leaves the extremum stack when it equals its top, so
//! repeated extrema survive until their last copy is popped.

use crate::error::ExerciseError;

#[derive(Debug, Clone)]
pub struct MinStack<T> {
    items: Vec<T>,
    mins: Vec<T>,
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            mins: Vec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.mins.last().map_or(true, |m| value <= *m) {
            self.mins.push(value.clone());
        }
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Result<T, ExerciseError> {
        let value = self.items.pop().ok_or(ExerciseError::Empty)?;
        if self.mins.last() == Some(&value) {
            self.mins.pop();
        }
        Ok(value)
    }

    pub fn top(&self) -> Result<&T, ExerciseError> {
        self.items.last().ok_or(ExerciseError::Empty)
    }

    pub fn min(&self) -> Result<&T, ExerciseError> {
        self.mins.last().ok_or(ExerciseError::Empty)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct MinMaxStack<T> {
    items: Vec<T>,
    mins: Vec<T>,
    maxs: Vec<T>,
}

impl<T: Ord + Clone> Default for MinMaxStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> MinMaxStack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            mins: Vec::new(),
            maxs: Vec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.mins.last().map_or(true, |m| value <= *m) {
            self.mins.push(value.clone());
        }
        if self.maxs.last().map_or(true, |m| value >= *m) {
            self.maxs.push(value.clone());
        }
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Result<T, ExerciseError> {
        let value = self.items.pop().ok_or(ExerciseError::Empty)?;
        if self.mins.last() == Some(&value) {
            self.mins.pop();
        }
        if self.maxs.last() == Some(&value) {
            self.maxs.pop();
        }
        Ok(value)
    }

    pub fn top(&self) -> Result<&T, ExerciseError> {
        self.items.last().ok_or(ExerciseError::Empty)
    }

    pub fn min(&self) -> Result<&T, ExerciseError> {
        self.mins.last().ok_or(ExerciseError::Empty)
    }

    pub fn max(&self) -> Result<&T, ExerciseError> {
        self.maxs.last().ok_or(ExerciseError::Empty)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
