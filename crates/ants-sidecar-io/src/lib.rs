pub mod error;
pub mod package;
pub mod wire;

pub use error::{PackageError, Result};
pub use package::{dump_package, load_package, load_package_value};
