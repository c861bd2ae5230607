use folio_core::Frontmatter;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `folio schema`: publish the frontmatter JSON Schema.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for!(Frontmatter), flags)
}
