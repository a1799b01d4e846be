mod watched_literal_propagator;

pub use watched_literal_propagator::WatchedLiteralPropagator;
