use crate::project::ProjectId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        source: ProjectId,
    },
    Dropped {
        source: ProjectId,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GestureEnd {
    pub source: Option<ProjectId>,
    pub dropped: bool,
}

/// Tracks the single pointer-driven drag gesture on a page. The dragged id
/// for a drop still travels in the platform transfer payload; this only
/// records how the gesture ended.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    phase: DragPhase,
}

impl DragTracker {
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn begin(&mut self, source: ProjectId) {
        self.phase = DragPhase::Dragging { source };
    }

    pub fn mark_dropped(&mut self) {
        if let DragPhase::Dragging { source } = &self.phase {
            self.phase = DragPhase::Dropped {
                source: source.clone(),
            };
        }
    }

    /// Returns to idle. Every gesture end, dropped or cancelled, is a save
    /// point for the caller.
    pub fn end(&mut self) -> GestureEnd {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => GestureEnd {
                source: None,
                dropped: false,
            },
            DragPhase::Dragging { source } => GestureEnd {
                source: Some(source),
                dropped: false,
            },
            DragPhase::Dropped { source } => GestureEnd {
                source: Some(source),
                dropped: true,
            },
        }
    }
}
