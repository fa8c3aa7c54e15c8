mod directory;
mod errors;
mod loader;
mod types;

pub use directory::{Directory, SearchOutcome, NO_MATCH_MESSAGE};
pub use errors::DataError;
pub use loader::{load_cottages, load_misc_markers};
pub use types::{Cottage, MarkerIcon, MiscMarker};
