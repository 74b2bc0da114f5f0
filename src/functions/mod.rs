//! Functiecatalogus en blend-logica voor parametrische oppervlakken.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::Serialize;

use crate::geom::Point3;

pub mod sphere;
pub mod torus;
pub mod wave;

/// Een parametrische oppervlaktefunctie: `(u, v, t)` → positie.
pub type SurfaceFunction = fn(f64, f64, f64) -> Point3;

/// Alle functies in de catalogus, in catalogusvolgorde.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FunctionKind {
    #[default]
    Wave2D,
    Wave3D,
    MultiWave2D,
    MultiWave3D,
    RippleWave2D,
    RippleWave3D,
    Sphere,
    ScalingSphere,
    RotatingSphere,
    Torus,
    RotatingTorus,
}

impl FunctionKind {
    pub const ALL: [Self; 11] = [
        Self::Wave2D,
        Self::Wave3D,
        Self::MultiWave2D,
        Self::MultiWave3D,
        Self::RippleWave2D,
        Self::RippleWave3D,
        Self::Sphere,
        Self::ScalingSphere,
        Self::RotatingSphere,
        Self::Torus,
        Self::RotatingTorus,
    ];

    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Zet een extern aangeleverde index om naar een functie. Een index buiten
    /// de catalogus valt terug op de eerste entry.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Self {
        if let Some(kind) = Self::ALL.get(ordinal) {
            *kind
        } else {
            log::debug!("functie-index {ordinal} buiten bereik, terugval op {}", Self::ALL[0]);
            Self::ALL[0]
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Wave2D => "Wave2D",
            Self::Wave3D => "Wave3D",
            Self::MultiWave2D => "MultiWave2D",
            Self::MultiWave3D => "MultiWave3D",
            Self::RippleWave2D => "RippleWave2D",
            Self::RippleWave3D => "RippleWave3D",
            Self::Sphere => "Sphere",
            Self::ScalingSphere => "ScalingSphere",
            Self::RotatingSphere => "RotatingSphere",
            Self::Torus => "Torus",
            Self::RotatingTorus => "RotatingTorus",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepteert een naam of alias, of een catalogusindex. Een index buiten de
/// catalogus valt terug op de eerste entry, net als [`FunctionKind::from_ordinal`].
impl<'de> Deserialize<'de> for FunctionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FunctionKindVisitor)
    }
}

struct FunctionKindVisitor;

impl Visitor<'_> for FunctionKindVisitor {
    type Value = FunctionKind;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("een functienaam of catalogusindex")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        FunctionCatalog::global()
            .resolve(value)
            .ok_or_else(|| E::custom(format!("onbekende functie `{value}`")))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(FunctionKind::from_ordinal(usize::try_from(value).unwrap_or(usize::MAX)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(FunctionKind::from_ordinal(usize::try_from(value).unwrap_or(usize::MAX)))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        // JS levert getallen als f64; alleen gehele, niet-negatieve waarden zijn een index.
        let ordinal = if value >= 0.0 && value.fract() == 0.0 {
            value as usize
        } else {
            usize::MAX
        };
        Ok(FunctionKind::from_ordinal(ordinal))
    }
}

/// Metadata voor registraties in de functiecatalogus.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub names: &'static [&'static str],
    pub kind: FunctionKind,
    pub function: SurfaceFunction,
}

/// Onveranderlijke catalogus, geïndexeerd op de ordinaal van [`FunctionKind`].
#[derive(Debug, Clone)]
pub struct FunctionCatalog {
    entries: Vec<Registration>,
    by_name: HashMap<String, FunctionKind>,
}

impl Default for FunctionCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            entries: Vec::with_capacity(FunctionKind::ALL.len()),
            by_name: HashMap::new(),
        };

        for registration in wave::REGISTRATIONS {
            catalog.register(*registration);
        }

        for registration in sphere::REGISTRATIONS {
            catalog.register(*registration);
        }

        for registration in torus::REGISTRATIONS {
            catalog.register(*registration);
        }

        catalog
    }
}

impl FunctionCatalog {
    /// De procesbrede catalogus. Wordt één keer opgebouwd en daarna alleen gelezen.
    #[must_use]
    pub fn global() -> &'static Self {
        static CATALOG: OnceLock<FunctionCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::default)
    }

    fn register(&mut self, registration: Registration) {
        debug_assert_eq!(
            registration.kind.ordinal(),
            self.entries.len(),
            "registraties moeten in catalogusvolgorde staan"
        );

        self.by_name
            .insert(normalize_name(registration.kind.name()), registration.kind);
        for name in registration.names {
            self.by_name.insert(normalize_name(name), registration.kind);
        }
        self.entries.push(registration);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Registration] {
        &self.entries
    }

    #[must_use]
    pub fn lookup(&self, kind: FunctionKind) -> SurfaceFunction {
        self.lookup_ordinal(kind.ordinal())
    }

    /// Zoekt een functie op ordinaal; buiten bereik levert de eerste entry.
    #[must_use]
    pub fn lookup_ordinal(&self, ordinal: usize) -> SurfaceFunction {
        self.entry(ordinal).function
    }

    /// Functie na `kind` in catalogusvolgorde, met wrap naar de eerste entry.
    #[must_use]
    pub fn next(&self, kind: FunctionKind) -> FunctionKind {
        self.entry(kind.ordinal() + 1).kind
    }

    /// Zoekt een functie op naam of alias, hoofdletterongevoelig.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<FunctionKind> {
        self.by_name.get(&normalize_name(name)).copied()
    }

    fn entry(&self, ordinal: usize) -> &Registration {
        match self.entries.get(ordinal) {
            Some(entry) => entry,
            None => {
                log::debug!("catalogusindex {ordinal} buiten bereik, terugval op index 0");
                &self.entries[0]
            }
        }
    }
}

/// Smoothstep-easing `3p² − 2p³` met de invoer geklemd op `[0, 1]`.
#[must_use]
pub fn smoothstep(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

/// Evalueert beide functies en interpoleert ongeklemd met een smoothstep-gewicht.
#[must_use]
pub fn blend(
    from: SurfaceFunction,
    to: SurfaceFunction,
    u: f64,
    v: f64,
    t: f64,
    progress: f64,
) -> Point3 {
    from(u, v, t).lerp_unclamped(to(u, v, t), smoothstep(progress))
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{FunctionCatalog, FunctionKind, blend, smoothstep};

    #[test]
    fn catalog_matches_kind_order() {
        let catalog = FunctionCatalog::global();
        assert_eq!(catalog.len(), FunctionKind::ALL.len());
        for (index, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(entry.kind.ordinal(), index);
            assert_eq!(FunctionKind::from_ordinal(index), entry.kind);
        }
    }

    #[test]
    fn next_wraps_after_last_entry() {
        let catalog = FunctionCatalog::global();
        assert_eq!(catalog.next(FunctionKind::RotatingTorus), FunctionKind::Wave2D);
        assert_eq!(catalog.next(FunctionKind::Wave2D), FunctionKind::Wave3D);
        assert_eq!(catalog.next(FunctionKind::RippleWave3D), FunctionKind::Sphere);
    }

    #[test]
    fn next_cycles_back_to_start() {
        let catalog = FunctionCatalog::global();
        for start in FunctionKind::ALL {
            let mut kind = start;
            for _ in 0..catalog.len() {
                kind = catalog.next(kind);
            }
            assert_eq!(kind, start);
        }
    }

    #[test]
    fn out_of_range_ordinal_falls_back_to_first() {
        let catalog = FunctionCatalog::global();
        let first = catalog.lookup_ordinal(0);
        for ordinal in [catalog.len(), catalog.len() + 7, usize::MAX] {
            let fallback = catalog.lookup_ordinal(ordinal);
            assert_eq!(fallback(0.3, -0.2, 1.1), first(0.3, -0.2, 1.1));
            assert_eq!(FunctionKind::from_ordinal(ordinal), FunctionKind::Wave2D);
        }
    }

    #[test]
    fn resolves_names_and_aliases() {
        let catalog = FunctionCatalog::global();
        assert_eq!(catalog.resolve("Wave2D"), Some(FunctionKind::Wave2D));
        assert_eq!(catalog.resolve("  rotatingtorus "), Some(FunctionKind::RotatingTorus));
        assert_eq!(catalog.resolve("WaterRipple3D"), Some(FunctionKind::RippleWave3D));
        assert_eq!(catalog.resolve("Scaling Sphere"), Some(FunctionKind::ScalingSphere));
        assert_eq!(catalog.resolve("onbekend"), None);
    }

    #[test]
    fn deserializes_from_name_or_ordinal() {
        let from_json = |raw: &str| serde_json::from_str::<FunctionKind>(raw);

        assert_eq!(from_json(r#""Sphere""#).expect("name"), FunctionKind::Sphere);
        assert_eq!(from_json(r#""Rotating Torus""#).expect("alias"), FunctionKind::RotatingTorus);
        assert_eq!(from_json("3").expect("ordinal"), FunctionKind::MultiWave3D);
        assert_eq!(from_json("42").expect("out of range"), FunctionKind::Wave2D);
        assert_eq!(from_json("-1").expect("negative"), FunctionKind::Wave2D);
        assert_eq!(from_json("2.5").expect("fraction"), FunctionKind::Wave2D);
        assert!(from_json(r#""onbekend""#).is_err());
    }

    #[test]
    fn smoothstep_shapes_and_clamps_input() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-12);
        assert!((smoothstep(0.25) - 0.156_25).abs() < 1e-12);
        assert_eq!(smoothstep(-3.0), 0.0);
        assert_eq!(smoothstep(1.5), 1.0);
    }

    #[test]
    fn blend_of_identical_functions_is_exact() {
        let catalog = FunctionCatalog::global();
        for kind in FunctionKind::ALL {
            let f = catalog.lookup(kind);
            for progress in [-1.0, 0.0, 0.3, 0.5, 1.0, 2.5] {
                assert_eq!(blend(f, f, 0.35, -0.6, 1.7, progress), f(0.35, -0.6, 1.7));
            }
        }
    }

    #[test]
    fn blend_hits_both_endpoints() {
        let catalog = FunctionCatalog::global();
        let from = catalog.lookup(FunctionKind::MultiWave3D);
        let to = catalog.lookup(FunctionKind::RotatingSphere);
        let (u, v, t) = (0.2, 0.7, 0.9);

        assert_eq!(blend(from, to, u, v, t, 0.0), from(u, v, t));
        assert!(blend(from, to, u, v, t, 1.0).distance_to(to(u, v, t)) < 1e-12);
    }

    #[test]
    fn blend_overshoot_follows_smoothstep_weight() {
        let catalog = FunctionCatalog::global();
        let from = catalog.lookup(FunctionKind::Wave3D);
        let to = catalog.lookup(FunctionKind::Torus);
        let (u, v, t) = (-0.4, 0.1, 0.6);
        let start = from(u, v, t);
        let end = to(u, v, t);

        for progress in [1.5, -0.5, 0.75] {
            let expected = end + (smoothstep(progress) - 1.0) * (end - start);
            let actual = blend(from, to, u, v, t, progress);
            assert!(actual.distance_to(expected) < 1e-12, "progress {progress}");
        }
    }
}
