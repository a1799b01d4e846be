pub enum PropagationStatus {
    ConflictDetected { conflict_clause: u32 },
    NoConflictDetected,
}

impl PropagationStatus {
    pub fn no_conflict(&self) -> bool {
        matches!(*self, PropagationStatus::NoConflictDetected)
    }

    pub fn conflict_detected(&self) -> bool {
        !self.no_conflict()
    }
}
