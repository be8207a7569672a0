pub mod member;
pub mod server;

use std::path::Path;

/// Directory holding the member data file, relative to the working directory.
pub fn data_dir() -> &'static Path {
    Path::new("data")
}
