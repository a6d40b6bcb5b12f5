mod error;
mod model;
mod tabs;
mod units;
mod value;

pub mod docx;

pub use error::Error;
pub use model::{DEFAULT_BASED_ON, ParagraphStyle, StyleKey};
pub use tabs::{TabKind, TabLeader, TabStop, Tabs};
pub use units::{INDENT_LEVEL_TWIPS, LINE_TWIPS, twips_to_pts};
pub use value::StyleValue;

use std::path::Path;

pub fn read_paragraph_styles(input: &Path) -> Result<Vec<docx::StyleDefinition>, Error> {
    docx::read_paragraph_styles(input)
}
