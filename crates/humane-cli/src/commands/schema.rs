use humane_backup::Backup;
use humane_core::entities::{Entry, Habit};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `humane schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.type_name), flags.format)
}

fn schema(type_name: SchemaType) -> schemars::Schema {
    match type_name {
        SchemaType::Habit => schema_for!(Habit),
        SchemaType::Entry => schema_for!(Entry),
        SchemaType::Backup => schema_for!(Backup),
    }
}
