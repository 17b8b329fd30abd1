pub mod ads;
pub mod articles;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod home;
pub mod messaging;
pub mod pages;
pub mod propositions;
pub mod users;
