mod three_cnf_reducer;

pub use three_cnf_reducer::ThreeCnfReducer;
