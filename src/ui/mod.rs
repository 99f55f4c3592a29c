pub mod batch;
pub mod session;
pub mod terminal;

pub use batch::run_batch;
pub use session::Session;
