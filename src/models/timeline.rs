use super::TimeStep;

/// One slot per time unit; `Some(i)` is owned by the i-th task in priority order.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    slots: Vec<Option<usize>>,
}

impl Timeline {
    pub fn new(runtime: TimeStep) -> Self {
        Self {
            slots: vec![None; runtime],
        }
    }

    pub fn len(&self) -> TimeStep {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn owner(&self, t: TimeStep) -> Option<usize> {
        self.slots.get(t).copied().flatten()
    }

    pub fn is_free(&self, t: TimeStep) -> bool {
        matches!(self.slots.get(t), Some(None))
    }

    /// Free slots in `[start, end)`, clipped to the timeline. Read-only.
    pub fn count_free(&self, start: TimeStep, end: TimeStep) -> usize {
        let end = end.min(self.slots.len());
        if start >= end {
            return 0;
        }
        self.slots[start..end].iter().filter(|slot| slot.is_none()).count()
    }

    /// Gives slot `t` to `owner`. A slot that is already owned is left alone
    /// and `false` is returned.
    pub fn claim(&mut self, t: TimeStep, owner: usize) -> bool {
        match self.slots.get_mut(t) {
            Some(slot) if slot.is_none() => {
                *slot = Some(owner);
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<Option<usize>> {
        self.slots.iter()
    }
}
