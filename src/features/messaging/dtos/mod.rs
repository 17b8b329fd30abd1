mod message_dto;

pub use message_dto::{
    MessageAdRef, MessageKind, MessageSummaryDto, MessageUserRef, SendMessageDto,
};
