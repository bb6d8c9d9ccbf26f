//! Attribute syntaxes of the two supported source dialects.

use std::fmt;
use std::path::Path;

/// Marker searched for by the copyright fixer, identical in both dialects.
pub const COPYRIGHT_MARKER: &str = "AssemblyCopyright";

/// An assembly attribute the rewriter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `AssemblyVersion`
    Version,
    /// `AssemblyFileVersion`
    FileVersion,
    /// `AssemblyInformationalVersion`
    InformationalVersion,
    /// `AssemblyCopyright`
    Copyright,
}

impl Attribute {
    /// Returns the attribute's type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Version => "AssemblyVersion",
            Self::FileVersion => "AssemblyFileVersion",
            Self::InformationalVersion => "AssemblyInformationalVersion",
            Self::Copyright => COPYRIGHT_MARKER,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Surface syntax of an assembly metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `[assembly: AssemblyVersion("1.0.0.0")]`
    #[default]
    CSharp,
    /// `<Assembly: AssemblyVersion("1.0.0.0")>`
    VisualBasic,
}

struct DialectTable {
    version: &'static str,
    file_version: &'static str,
    informational_version: &'static str,
    copyright: &'static str,
    comment: &'static str,
    open: &'static str,
    close: &'static str,
}

const CSHARP: DialectTable = DialectTable {
    version: "[assembly: AssemblyVersion",
    file_version: "[assembly: AssemblyFileVersion",
    informational_version: "[assembly: AssemblyInformationalVersion",
    copyright: "[assembly: AssemblyCopyright",
    comment: "//",
    open: "[assembly: ",
    close: "]",
};

const VISUAL_BASIC: DialectTable = DialectTable {
    version: "<Assembly: AssemblyVersion",
    file_version: "<Assembly: AssemblyFileVersion",
    informational_version: "<Assembly: AssemblyInformationalVersion",
    copyright: "<Assembly: AssemblyCopyright",
    comment: "'",
    open: "<Assembly: ",
    close: ">",
};

impl Dialect {
    /// Selects the dialect from a file extension.
    ///
    /// `.vb` (any case) selects Visual Basic; everything else is C#.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("vb") => Self::VisualBasic,
            _ => Self::CSharp,
        }
    }

    fn table(self) -> &'static DialectTable {
        match self {
            Self::CSharp => &CSHARP,
            Self::VisualBasic => &VISUAL_BASIC,
        }
    }

    /// Returns the literal prefix that introduces `attribute`.
    #[must_use]
    pub fn prefix(self, attribute: Attribute) -> &'static str {
        let table = self.table();
        match attribute {
            Attribute::Version => table.version,
            Attribute::FileVersion => table.file_version,
            Attribute::InformationalVersion => table.informational_version,
            Attribute::Copyright => table.copyright,
        }
    }

    /// Returns the line-comment marker.
    #[must_use]
    pub fn comment_marker(self) -> &'static str {
        self.table().comment
    }

    /// Returns true if the line is a comment in this dialect.
    #[must_use]
    pub fn is_comment(self, line: &str) -> bool {
        line.trim_start().starts_with(self.comment_marker())
    }

    /// Renders a complete attribute declaration with a quoted value.
    #[must_use]
    pub fn attribute_line(self, attribute: Attribute, value: &str) -> String {
        let table = self.table();
        format!("{}{}(\"{value}\"){}", table.open, attribute.name(), table.close)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CSharp => f.write_str("C#"),
            Self::VisualBasic => f.write_str("Visual Basic"),
        }
    }
}
