/// Domain layer - license discovery rules independent of any I/O
pub mod domain;
pub mod policies;
pub mod services;
