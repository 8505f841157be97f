use std::collections::BTreeSet;

/// Drag selection over row indices in display order.
///
/// A press anchors the selection, moving over rows while pressed selects the
/// contiguous run between the anchor and the row under the pointer, release
/// ends the drag and keeps the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    anchor: Option<usize>,
    dragging: bool,
    selected: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn pointer_down(&mut self, index: usize) {
        self.anchor = Some(index);
        self.dragging = true;
        self.selected.clear();
        self.selected.insert(index);
    }

    pub fn pointer_over(&mut self, index: usize) {
        if !self.dragging {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        let (from, to) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };
        self.selected = (from..=to).collect();
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn clear(&mut self) {
        self.anchor = None;
        self.dragging = false;
        self.selected.clear();
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
