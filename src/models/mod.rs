pub mod assessment;
pub mod history;
pub mod profile;
pub mod snapshot;

pub use assessment::*;
pub use history::*;
pub use profile::*;
pub use snapshot::*;
