use serde::{Deserialize, Serialize};
use strum::Display;

/// How new registry entries are combined with the existing ones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum WriteMode {
    /// Keep the existing entries and add the new ones after them.
    #[default]
    Append,
    /// Discard the existing entries.
    Overwrite,
}
