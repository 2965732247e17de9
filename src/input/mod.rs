//! Input handling for the command line front end
//!
//! Profile documents are read and written here, never by the matching core.

pub mod profile_file;

pub use profile_file::ProfileDocument;
