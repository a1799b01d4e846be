use std::collections::BTreeMap;

/// Complexity bookkeeping for a single k-CNF to 3-CNF transformation.
pub struct ReductionStats {
    pub num_original_variables: u32,
    pub num_original_clauses: usize,
    pub num_reduced_variables: u32,
    pub num_reduced_clauses: usize,
    pub num_auxiliary_variables: u32,
    pub original_clause_size_distribution: BTreeMap<u32, u64>,
    pub num_original_literals: u64,
    pub num_reduced_literals: u64,
    pub variable_growth_ratio: f64,
    pub clause_growth_ratio: f64,
    pub reduction_time_ms: f64,
}

impl ReductionStats {
    pub const CSV_HEADER: &'static str =
        "OriginalVars,OriginalClauses,ReducedVars,ReducedClauses,AuxVars,VarRatio,ClauseRatio,TimeMs";

    //ratios are rendered to three decimals and the time to two, matching the
    //  header layout above
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.3},{:.3},{:.2}",
            self.num_original_variables,
            self.num_original_clauses,
            self.num_reduced_variables,
            self.num_reduced_clauses,
            self.num_auxiliary_variables,
            self.variable_growth_ratio,
            self.clause_growth_ratio,
            self.reduction_time_ms
        )
    }
}
