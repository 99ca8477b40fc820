//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BookingRepository, FeedbackRepository, NewUser, RepoResult, SlotRepository, UserRepository,
};
