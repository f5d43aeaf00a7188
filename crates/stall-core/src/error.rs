use std::fmt;

/// Machine-readable error codes for scripting-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    CatalogUnreadable,
    CatalogParseError,
    ProductNotFound,
    CartFileUnreadable,
    CartWriteFailed,
    TerminalInitFailed,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::CatalogUnreadable => "E1002",
            Self::CatalogParseError => "E1003",
            Self::ProductNotFound => "E2001",
            Self::CartFileUnreadable => "E3001",
            Self::CartWriteFailed => "E5001",
            Self::TerminalInitFailed => "E5002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::CatalogUnreadable => "Catalog file unreadable",
            Self::CatalogParseError => "Catalog file parse error",
            Self::ProductNotFound => "Product not found",
            Self::CartFileUnreadable => "Cart file unreadable",
            Self::CartWriteFailed => "Cart file write failed",
            Self::TerminalInitFailed => "Terminal initialization failed",
        }
    }

    /// Optional remediation hint that can be surfaced to users and scripts.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in stall/config.toml and retry."),
            Self::CatalogUnreadable => Some("Check the catalog path passed via --catalog or config."),
            Self::CatalogParseError => {
                Some("Fix the [[products]] entries in the catalog file and retry.")
            }
            Self::ProductNotFound => Some("Use `stall list` to see available products."),
            Self::CartFileUnreadable => {
                Some("The cart starts empty; the file is rewritten on the next change.")
            }
            Self::CartWriteFailed => Some("Check disk space and write permissions."),
            Self::TerminalInitFailed => Some("Run `stall browse` from an interactive terminal."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::ConfigParseError,
            ErrorCode::CatalogUnreadable,
            ErrorCode::CatalogParseError,
            ErrorCode::ProductNotFound,
            ErrorCode::CartFileUnreadable,
            ErrorCode::CartWriteFailed,
            ErrorCode::TerminalInitFailed,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::ProductNotFound.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }
}
