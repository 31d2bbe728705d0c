pub mod operations;
pub mod session;

pub use operations::is_running;
pub use session::LaunchSession;
