//! Constants used throughout the matpath library.
//!
//! Central definitions for the textual forms of paths and ids.

/// Separator between sibling indices in the textual path form, e.g. `1.1.2.1`.
pub const PATH_SEPARATOR: char = '.';

/// Separator between the two components in the textual id form, e.g. `11/8`.
pub const ID_SEPARATOR: char = '/';
