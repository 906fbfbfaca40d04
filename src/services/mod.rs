// Service exports
pub mod memory;
pub mod mentee_client;
pub mod mentor_client;
pub mod store;

pub use memory::{InMemoryMenteeStore, InMemoryMentorStore};
pub use mentee_client::MenteeServiceClient;
pub use mentor_client::MentorServiceClient;
pub use store::{build_http_client, MenteeStore, MentorStore, StoreError};
