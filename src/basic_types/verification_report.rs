/// The verdict of checking a candidate assignment against a formula. The
/// verdict always covers every clause; the id list is capped so that
/// diagnostics stay bounded on badly broken witnesses.
pub struct VerificationReport {
    pub is_satisfied: bool,
    pub num_satisfied_clauses: usize,
    pub num_falsified_clauses: usize,
    pub falsified_clause_ids: Vec<u32>,
}

impl VerificationReport {
    pub const MAX_REPORTED_FALSIFIED_CLAUSES: usize = 10;
}
