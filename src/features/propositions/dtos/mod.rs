mod proposition_dto;

pub use proposition_dto::{
    CreatePropositionDto, PropositionAdRef, PropositionDto, PropositionUserRef,
};
