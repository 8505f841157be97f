mod schedule;
mod settings;
pub use schedule::*;
pub use settings::*;
