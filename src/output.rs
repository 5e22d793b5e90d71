//! Field selection and printing

use std::io::{self, Write};

use crate::module::types::ModuleInfo;

/// Which fields to print for each module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputFields {
    pub name: bool,
    pub version: bool,
    pub time: bool,
    pub repo: bool,
    pub reference: bool,
    pub hash: bool,
    pub dump: bool,
}

impl OutputFields {
    /// True when no field is selected, in which case nothing is printed
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Writes the selected fields of `info`, one per line.
///
/// Order is fixed: name, version, time, repository URL, ref, hash, then the
/// indented JSON dump.
pub fn write_info<W: Write>(
    out: &mut W,
    fields: &OutputFields,
    info: &ModuleInfo,
) -> io::Result<()> {
    if fields.name {
        // Comment form so the output can be pasted next to a go.mod require line
        writeln!(out, "// {}", info.name)?;
    }
    if fields.version {
        writeln!(out, "{}", info.version)?;
    }
    if fields.time {
        writeln!(out, "{}", info.time)?;
    }
    if fields.repo {
        writeln!(out, "{}", info.origin.url)?;
    }
    if fields.reference {
        writeln!(out, "{}", info.origin.reference)?;
    }
    if fields.hash {
        writeln!(out, "{}", info.origin.hash)?;
    }
    if fields.dump {
        let json = serde_json::to_string_pretty(info).map_err(io::Error::from)?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}
