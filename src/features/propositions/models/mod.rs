mod proposition;

pub use proposition::PropositionStatus;
