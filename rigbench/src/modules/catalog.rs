use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    error::CatalogError,
    schemas::computing::{Cpu, Gpu, Listing, Ram},
};

/// Search results are capped to this many entries unless configured otherwise.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// The fixed set of components a build can be assembled from.
///
/// [`Catalog::from_json`], [`Catalog::load`] and [`Catalog::builtin`] all
/// validate every record up front; a catalog that fails validation is refused
/// rather than allowed to feed NaN into the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub cpus: Vec<Cpu>,
    pub gpus: Vec<Gpu>,
    pub ram: Vec<Ram>,
}

lazy_static! {
    static ref BUILTIN: Catalog = Catalog::from_json(include_str!("../../data/catalog.json"))
        .expect("built-in component catalog is invalid");
}

/// A search result, shaped for listing.
#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    pub name: &'a str,
    pub price: f64,
    pub specs: String,
}

impl<'a> SearchHit<'a> {
    pub fn of<T: Listing>(item: &'a T) -> Self {
        Self {
            name: item.name(),
            price: item.price(),
            specs: item.spec_summary(),
        }
    }
}

/// Optional narrowing applied on top of the name query.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub limit: usize,
    pub max_price: Option<f64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            max_price: None,
        }
    }
}

/// Case-insensitive substring match on the name. An empty query finds nothing.
pub fn search<'a, T: Listing>(items: &'a [T], query: &str, options: SearchOptions) -> Vec<&'a T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&query))
        .filter(|item| options.max_price.map_or(true, |max| item.price() <= max))
        .take(options.limit)
        .collect()
}

/// Resolve a user-supplied name to a single record.
///
/// An exact (case-insensitive) name match wins; otherwise the query must match
/// exactly one record as a substring.
///
/// # Errors
/// [`CatalogError::ComponentNotFound`] or [`CatalogError::AmbiguousComponent`].
pub fn find<'a, T: Listing>(items: &'a [T], query: &str) -> Result<&'a T, CatalogError> {
    let wanted = query.trim();
    if let Some(exact) = items
        .iter()
        .find(|item| item.name().eq_ignore_ascii_case(wanted))
    {
        return Ok(exact);
    }

    let hits = search(
        items,
        wanted,
        SearchOptions {
            limit: usize::MAX,
            max_price: None,
        },
    );
    match hits.as_slice() {
        [only] => Ok(*only),
        [] => {
            let kind = T::KIND;
            tracing::warn!(kind = %kind, query = wanted, "no component matched");
            Err(CatalogError::ComponentNotFound {
                kind: T::KIND,
                query: wanted.to_string(),
            })
        }
        many => Err(CatalogError::AmbiguousComponent {
            kind: T::KIND,
            query: wanted.to_string(),
            candidates: many.iter().map(|item| item.name().to_string()).collect(),
        }),
    }
}

fn check_all<T: Listing>(items: &[T]) -> Result<(), CatalogError> {
    for item in items {
        item.check().map_err(|reason| CatalogError::Invalid {
            kind: T::KIND,
            name: item.name().to_string(),
            reason,
        })?;
    }
    Ok(())
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse and validate a catalog in the `{"cpus": [...], "gpus": [...], "ram": [...]}` layout.
    ///
    /// # Errors
    /// Errors if the JSON doesn't parse or any record breaks its constraints.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        tracing::info!(
            cpus = catalog.cpus.len(),
            gpus = catalog.gpus.len(),
            ram = catalog.ram.len(),
            "loaded component catalog"
        );
        Ok(catalog)
    }

    /// Read a catalog file from disk. See [`Catalog::from_json`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        check_all(&self.cpus)?;
        check_all(&self.gpus)?;
        check_all(&self.ram)
    }

    pub fn cpu(&self, name: &str) -> Result<&Cpu, CatalogError> {
        find(&self.cpus, name)
    }

    pub fn gpu(&self, name: &str) -> Result<&Gpu, CatalogError> {
        find(&self.gpus, name)
    }

    pub fn ram(&self, name: &str) -> Result<&Ram, CatalogError> {
        find(&self.ram, name)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{search, Catalog, SearchHit, SearchOptions};
    use crate::{
        error::CatalogError,
        schemas::computing::{ComponentKind, ComputeUnits},
    };

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.cpus.len(), 30);
        assert_eq!(catalog.gpus.len(), 23);
        assert_eq!(catalog.ram.len(), 16);
        assert!(catalog.validate().is_ok());

        let xtx = catalog.gpu("AMD RX 7900 XTX").unwrap();
        assert_eq!(xtx.compute_units, ComputeUnits::StreamProcessors(6144));
    }

    #[test]
    fn test_search_is_case_insensitive_and_capped() {
        let catalog = Catalog::builtin();

        let hits = search(&catalog.cpus, "RYZEN 9", SearchOptions::default());
        assert_eq!(hits.len(), 6);
        assert!(hits.iter().all(|cpu| cpu.name.contains("Ryzen 9")));

        let capped = search(&catalog.cpus, "intel", SearchOptions::default());
        assert_eq!(capped.len(), 10);

        assert!(search(&catalog.cpus, "   ", SearchOptions::default()).is_empty());
        assert!(search(&catalog.gpus, "voodoo", SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_search_max_price() {
        let catalog = Catalog::builtin();
        let options = SearchOptions {
            limit: 100,
            max_price: Some(400.0),
        };
        let hits = search(&catalog.gpus, "rtx", options);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|gpu| gpu.price <= 400.0));

        let hit = SearchHit::of(hits[0]);
        assert!(hit.specs.ends_with('W'));
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.cpu("amd ryzen 7 7800x3d").unwrap().name,
            "AMD Ryzen 7 7800X3D"
        );
        /* unique substring */
        assert_eq!(catalog.gpu("4090").unwrap().name, "NVIDIA RTX 4090");
        /* exact match beats the longer "14900KF" */
        assert_eq!(
            catalog.cpu("Intel Core i9-14900K").unwrap().name,
            "Intel Core i9-14900K"
        );

        match catalog.cpu("14900") {
            Err(CatalogError::AmbiguousComponent { candidates, .. }) => {
                assert_eq!(candidates.len(), 2)
            }
            other => panic!("unexpected {:?}", other),
        }
        match catalog.ram("DDR6") {
            Err(CatalogError::ComponentNotFound { kind, .. }) => {
                assert_eq!(kind, ComponentKind::Ram)
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_records() {
        let bad_threads = r#"{"cpus": [{"name": "Odd", "price": 100, "cores": 8, "threads": 4,
            "baseClock": 3.0, "boostClock": 4.0, "tdp": 65, "tier": "budget"}], "gpus": [], "ram": []}"#;
        match Catalog::from_json(bad_threads) {
            Err(CatalogError::Invalid { kind, name, .. }) => {
                assert_eq!(kind, ComponentKind::Cpu);
                assert_eq!(name, "Odd");
            }
            other => panic!("unexpected {:?}", other),
        }

        let free_ram = r#"{"cpus": [], "gpus": [], "ram": [{"name": "Free", "price": 0,
            "capacity": 16, "type": "DDR4", "speed": 3200, "cas": 16, "voltage": 1.35}]}"#;
        assert!(matches!(
            Catalog::from_json(free_ram),
            Err(CatalogError::Invalid { .. })
        ));

        let negative_price = r#"{"cpus": [], "gpus": [], "ram": [{"name": "Refund", "price": "-$200",
            "capacity": 16, "type": "DDR4", "speed": 3200, "cas": 16, "voltage": 1.35}]}"#;
        assert!(matches!(
            Catalog::from_json(negative_price),
            Err(CatalogError::Parse(_))
        ));

        let missing_field = r#"{"cpus": [{"name": "Half", "price": 100}], "gpus": [], "ram": []}"#;
        assert!(matches!(
            Catalog::from_json(missing_field),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"cpus": [{{"name": "Intel Core i5-14400F", "price": "$200", "cores": 10,
                "threads": 16, "baseClock": 2.5, "boostClock": 4.7, "tdp": 65, "tier": "budget"}}],
                "gpus": [], "ram": []}}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.cpus[0].price, 200.0);

        assert!(matches!(
            Catalog::load("/definitely/not/here.json"),
            Err(CatalogError::Io { .. })
        ));
    }
}
