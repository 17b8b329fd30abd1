mod proposition_service;

pub use proposition_service::PropositionService;
