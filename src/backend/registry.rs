//! Open figure managers

use std::collections::BTreeMap;

use tracing::debug;

use super::manager::FigureManager;
use crate::figure::Figure;

/// All figure managers of the process, keyed by figure number
#[derive(Debug, Default)]
pub struct FigureRegistry {
    managers: BTreeMap<usize, FigureManager>,
    active: Option<usize>,
    next_num: usize,
}

impl FigureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a figure; it becomes the active one
    pub fn add(&mut self, figure: Figure) -> usize {
        self.next_num += 1;
        let num = self.next_num;
        self.managers.insert(num, FigureManager::new(num, figure));
        self.active = Some(num);
        debug!("opened figure {}", num);
        num
    }

    pub fn get(&self, num: usize) -> Option<&FigureManager> {
        self.managers.get(&num)
    }

    pub fn get_mut(&mut self, num: usize) -> Option<&mut FigureManager> {
        self.managers.get_mut(&num)
    }

    /// Most recently created or selected manager
    pub fn active(&self) -> Option<&FigureManager> {
        self.active.and_then(|num| self.managers.get(&num))
    }

    pub fn active_mut(&mut self) -> Option<&mut FigureManager> {
        self.active.and_then(|num| self.managers.get_mut(&num))
    }

    /// Make `num` the active figure; `false` if no such figure
    pub fn set_active(&mut self, num: usize) -> bool {
        if self.managers.contains_key(&num) {
            self.active = Some(num);
            true
        } else {
            false
        }
    }

    /// Managers in figure-number order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FigureManager> {
        self.managers.values_mut()
    }

    pub fn nums(&self) -> Vec<usize> {
        self.managers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    /// Close one figure; the newest remaining one becomes active
    pub fn destroy(&mut self, num: usize) -> Option<FigureManager> {
        let manager = self.managers.remove(&num)?;
        if self.active == Some(num) {
            self.active = self.managers.keys().next_back().copied();
        }
        Some(manager)
    }

    /// Close every figure
    pub fn destroy_all(&mut self) {
        debug!("closing {} figures", self.managers.len());
        self.managers.clear();
        self.active = None;
    }
}
