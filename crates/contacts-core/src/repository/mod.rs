// # Contact Repository Implementations
//
// In-process implementations of the ContactRepository trait. The HTTP
// implementation lives in the `contacts-http` crate.

pub mod memory;

pub use memory::MemoryContactRepository;
