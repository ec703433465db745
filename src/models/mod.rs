pub mod candidate;
pub mod company;
pub mod email_outbox;
pub mod interview;
pub mod otp;
pub mod user;
