//! Commodity name to dataset code lookup

use crate::error::{CommodityError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Built-in commodity table: display name and upstream dataset code
pub const BUILTIN_SYMBOLS: &[(&str, &str)] = &[
    ("Brent", "CHRIS/ICE_B1"),
    ("WTI", "CHRIS/CME_CL1"),
    ("RBOB", "CHRIS/CME_RB1"),
    ("EBOB", "NSE/EBOP"),
    ("CBOB", "NSE/CBOP"),
    ("Singapore Gasoline R92", "SGX/FC03"),
    ("Europe Gasoil", "CHRIS/ICE_GASO"),
    ("Marine Gasoil 0.5% Singapore", "SGX/MGO"),
    ("Far East Index Propane", "EIA/PET_WCRSTUS1"),
    ("Far East Index Butane", "EIA/PET_WRBSTUS1"),
    ("Mt Belv Propane", "EIA/PET_RTPM_NUS_D"),
    ("Mt Belv Butane", "EIA/PET_RTBU_NUS_D"),
    ("ULSD New York", "EIA/PET_RMLS_NUS_D"),
    ("Asia Gasoil", "SGX/FOIL"),
    ("Marine Gasoil", "SGX/MGO"),
    ("Gold", "LBMA/GOLD"),
    ("Silver", "LBMA/SILVER"),
];

/// One entry of a symbol file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    /// Commodity name as callers spell it
    pub name: String,
    /// Dataset code understood by the market data API
    pub code: String,
}

/// Immutable commodity name to dataset code map
///
/// Lookups are exact and case-sensitive. Several names may share a code,
/// but each name appears once.
#[derive(Debug, Clone)]
pub struct CommoditySymbolMap {
    codes: HashMap<String, String>,
    order: Vec<String>,
}

impl CommoditySymbolMap {
    /// Build a map from name/code pairs, rejecting duplicate names
    pub fn from_pairs<I, N, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut codes = HashMap::new();
        let mut order = Vec::new();

        for (name, code) in pairs {
            let name = name.into();
            let code = code.into();

            if name.is_empty() || code.is_empty() {
                return Err(CommodityError::ConfigError(
                    "symbol names and codes must not be empty".to_string(),
                ));
            }
            if codes.contains_key(&name) {
                return Err(CommodityError::ConfigError(format!(
                    "duplicate commodity name in symbol map: {name}"
                )));
            }

            order.push(name.clone());
            codes.insert(name, code);
        }

        Ok(Self { codes, order })
    }

    /// The built-in commodity table
    pub fn builtin() -> Self {
        let codes: HashMap<String, String> = BUILTIN_SYMBOLS
            .iter()
            .map(|(name, code)| ((*name).to_string(), (*code).to_string()))
            .collect();
        let order = BUILTIN_SYMBOLS
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();

        Self { codes, order }
    }

    /// Load a map from a JSON array of `{"name": .., "code": ..}` objects
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let entries: Vec<SymbolEntry> = agent_utils::load_json_file(path)?;
        Self::from_pairs(entries.into_iter().map(|e| (e.name, e.code)))
    }

    /// Parse a map from a JSON array of `{"name": .., "code": ..}` objects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<SymbolEntry> = serde_json::from_str(json)?;
        Self::from_pairs(entries.into_iter().map(|e| (e.name, e.code)))
    }

    /// Resolve a commodity name to its dataset code
    pub fn resolve(&self, name: &str) -> Result<&str> {
        self.codes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CommodityError::NotConfigured(name.to_string()))
    }

    /// Whether the name is configured
    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    /// Entries in configuration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|name| self.codes.get(name).map(|code| (name.as_str(), code.as_str())))
    }

    /// Number of configured commodities
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for CommoditySymbolMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resolves_gold() {
        let map = CommoditySymbolMap::builtin();
        assert_eq!(map.len(), BUILTIN_SYMBOLS.len());
        assert_eq!(map.resolve("Gold").unwrap(), "LBMA/GOLD");
        assert_eq!(map.resolve("Marine Gasoil").unwrap(), "SGX/MGO");
        assert_eq!(map.resolve("Marine Gasoil 0.5% Singapore").unwrap(), "SGX/MGO");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let map = CommoditySymbolMap::builtin();
        assert!(map.contains("Brent"));
        assert!(!map.contains("brent"));

        let err = map.resolve("brent").unwrap_err();
        assert!(matches!(err, CommodityError::NotConfigured(name) if name == "brent"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = CommoditySymbolMap::from_pairs([("Gold", "A"), ("Gold", "B")]);
        assert!(matches!(result, Err(CommodityError::ConfigError(_))));
    }

    #[test]
    fn test_entries_keep_configuration_order() {
        let map = CommoditySymbolMap::from_pairs([("Zinc", "LME/ZN"), ("Aluminium", "LME/AL")])
            .unwrap();
        let names: Vec<_> = map.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zinc", "Aluminium"]);
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("symbols-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"name": "Nickel", "code": "LME/NI"}]"#).unwrap();

        let map = CommoditySymbolMap::from_json_file(&path).unwrap();
        assert_eq!(map.resolve("Nickel").unwrap(), "LME/NI");
        std::fs::remove_file(path).unwrap();

        let err = CommoditySymbolMap::from_json_file("/no/such/symbols.json").unwrap_err();
        assert!(
            matches!(err, CommodityError::ConfigError(ref msg) if msg.contains("/no/such/symbols.json"))
        );
    }

    #[test]
    fn test_from_json_str() {
        let map = CommoditySymbolMap::from_json_str(
            r#"[{"name": "Copper", "code": "CHRIS/CME_HG1"}]"#,
        )
        .unwrap();
        assert_eq!(map.resolve("Copper").unwrap(), "CHRIS/CME_HG1");

        assert!(matches!(
            CommoditySymbolMap::from_json_str(r#"{"Copper": "X"}"#),
            Err(CommodityError::Json(_))
        ));
    }
}
