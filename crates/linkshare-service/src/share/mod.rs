//! Share persistence seams and link naming.

pub mod memory;
pub mod naming;
pub mod usecase;

pub use memory::InMemoryShareStore;
pub use naming::default_link_name;
pub use usecase::{ShareCreateUseCase, ShareUpdateUseCase};
