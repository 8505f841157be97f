mod requests;
mod summary;
pub use requests::*;
pub use summary::*;
