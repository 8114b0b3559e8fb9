//! Declarative noise trees.
//!
//! A [`NoiseConfig`] is plain serde data; [`NoiseConfig::build`] turns it into a
//! live producer, resolving blend names through a [`BlendRegistry`]. Errors are
//! reported eagerly at build time, never during evaluation.
use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::blend::{Blend, SharedBlend, BUILTIN_BLENDS};
use crate::error::NoiseError;
use crate::noise::{fold, CompositeNoise, Constant, NoiseFnAdapter, SharedNoise};

fn default_frequency() -> f64 {
    1.0
}

fn default_unit() -> bool {
    true
}

/// One node of a noise tree, tagged by `"type"` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoiseConfig {
    Constant {
        value: f64,
    },
    Perlin {
        seed: u32,
        #[serde(default = "default_frequency")]
        frequency: f64,
        /// Remap to [0, 1] (default) instead of raw [-1, 1].
        #[serde(default = "default_unit")]
        unit: bool,
    },
    Composite {
        first: Box<NoiseConfig>,
        second: Box<NoiseConfig>,
        blend: String,
    },
    /// Left fold of one or more children with one blend.
    Fold {
        children: Vec<NoiseConfig>,
        blend: String,
    },
}

impl NoiseConfig {
    pub fn from_json(json: &str) -> Result<Self, NoiseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// XNOR of two decorrelated Perlin layers, the classic "marbled maze" mix.
    pub fn xnor_perlin(seed: u32) -> Self {
        NoiseConfig::Composite {
            first: Box::new(NoiseConfig::Perlin { seed, frequency: 4.0, unit: true }),
            second: Box::new(NoiseConfig::Perlin {
                seed: seed ^ 0x5EED,
                frequency: 7.0,
                unit: true,
            }),
            blend: "xnor".to_string(),
        }
    }

    pub fn build(&self, registry: &BlendRegistry) -> Result<SharedNoise, NoiseError> {
        match self {
            NoiseConfig::Constant { value } => Ok(Box::new(Constant(*value))),
            NoiseConfig::Perlin { seed, frequency, unit } => {
                if !frequency.is_finite() || *frequency <= 0.0 {
                    return Err(NoiseError::InvalidParameter { name: "frequency", value: *frequency });
                }
                let mut perlin = NoiseFnAdapter::perlin(*seed).with_frequency(*frequency);
                if *unit {
                    perlin = perlin.unit();
                }
                Ok(Box::new(perlin))
            }
            NoiseConfig::Composite { first, second, blend } => {
                let blending = registry.get(blend)?;
                debug!("building {blend} composite");
                let first = first.build(registry)?;
                let second = second.build(registry)?;
                Ok(Box::new(CompositeNoise::new(first, second, blending)))
            }
            NoiseConfig::Fold { children, blend } => {
                let blending = registry.get(blend)?;
                debug!("folding {} children with {blend}", children.len());
                let built = children
                    .iter()
                    .map(|child| child.build(registry))
                    .collect::<Result<Vec<_>, _>>()?;
                fold(built, blending)
            }
        }
    }
}

/// Name → blend lookup. Open for extension via [`BlendRegistry::register`].
#[derive(Debug, Clone)]
pub struct BlendRegistry {
    blends: HashMap<String, SharedBlend>,
}

impl BlendRegistry {
    pub fn empty() -> Self {
        Self { blends: HashMap::new() }
    }

    /// Registry pre-populated with every blend in [`BUILTIN_BLENDS`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for (name, blend) in BUILTIN_BLENDS {
            registry.register(name, blend);
        }
        registry
    }

    /// Add `blend` under `name`, replacing any previous entry.
    pub fn register<B>(&mut self, name: impl Into<String>, blend: B) -> &mut Self
    where
        B: Blend + Send + Sync + 'static,
    {
        self.blends.insert(name.into(), SharedBlend::new(blend));
        self
    }

    pub fn get(&self, name: &str) -> Result<SharedBlend, NoiseError> {
        self.blends
            .get(name)
            .cloned()
            .ok_or_else(|| NoiseError::UnknownBlend(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.blends.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for BlendRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::Noise;
    use approx::assert_abs_diff_eq;

    fn constant(value: f64) -> Box<NoiseConfig> {
        Box::new(NoiseConfig::Constant { value })
    }

    #[test]
    fn json_xnor_of_constants_evaluates_to_one() {
        let json = r#"{
            "type": "composite",
            "blend": "xnor",
            "first":  { "type": "constant", "value": 0.5 },
            "second": { "type": "constant", "value": 0.5 }
        }"#;
        let noise = NoiseConfig::from_json(json).unwrap().build(&BlendRegistry::default()).unwrap();
        assert_eq!(noise.get(0.5, 0.5), 1.0);
    }

    #[test]
    fn perlin_defaults_apply() {
        let cfg = NoiseConfig::from_json(r#"{ "type": "perlin", "seed": 3 }"#).unwrap();
        assert_eq!(cfg, NoiseConfig::Perlin { seed: 3, frequency: 1.0, unit: true });
    }

    #[test]
    fn built_perlin_matches_adapter() {
        let cfg = NoiseConfig::Perlin { seed: 11, frequency: 2.5, unit: true };
        let built = cfg.build(&BlendRegistry::default()).unwrap();
        let direct = NoiseFnAdapter::perlin(11).with_frequency(2.5).unit();
        assert_eq!(built.get(0.37, 0.81), direct.get(0.37, 0.81));
    }

    #[test]
    fn unknown_blend_is_rejected() {
        let cfg = NoiseConfig::Composite { first: constant(0.1), second: constant(0.2), blend: "nand".into() };
        let err = cfg.build(&BlendRegistry::default()).err();
        assert!(matches!(err, Some(NoiseError::UnknownBlend(ref name)) if name == "nand"));
    }

    #[test]
    fn unknown_blend_deep_in_tree_is_rejected() {
        let inner = NoiseConfig::Composite { first: constant(0.1), second: constant(0.2), blend: "bogus".into() };
        let cfg = NoiseConfig::Composite { first: Box::new(inner), second: constant(0.3), blend: "xnor".into() };
        assert!(cfg.build(&BlendRegistry::default()).is_err());
    }

    #[test]
    fn non_positive_frequency_is_rejected() {
        for frequency in [0.0, -1.0] {
            let cfg = NoiseConfig::Perlin { seed: 0, frequency, unit: true };
            let err = cfg.build(&BlendRegistry::default()).err();
            assert!(matches!(err, Some(NoiseError::InvalidParameter { name: "frequency", .. })));
        }
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = NoiseConfig::from_json(r#"{ "type": "spiral" }"#).unwrap_err();
        assert!(matches!(err, NoiseError::Json(_)));
    }

    #[test]
    fn registered_blend_is_usable_by_name() {
        let mut registry = BlendRegistry::default();
        registry.register("difference", |a: f64, b: f64| a - b);
        let cfg = NoiseConfig::Composite { first: constant(0.9), second: constant(0.4), blend: "difference".into() };
        let noise = cfg.build(&registry).unwrap();
        assert_abs_diff_eq!(noise.get(0.0, 0.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn builtins_are_all_registered() {
        let registry = BlendRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            ["and", "average", "bitwise_xnor", "bitwise_xor", "max", "min", "or", "xnor", "xor"]
        );
        assert!(BlendRegistry::empty().get("xnor").is_err());
    }

    #[test]
    fn fold_config_blends_all_children() {
        let json = r#"{
            "type": "fold",
            "blend": "max",
            "children": [
                { "type": "constant", "value": 0.2 },
                { "type": "constant", "value": 0.7 },
                { "type": "constant", "value": 0.4 }
            ]
        }"#;
        let noise = NoiseConfig::from_json(json).unwrap().build(&BlendRegistry::default()).unwrap();
        assert_eq!(noise.get(1.0, 1.0), 0.7);
    }

    #[test]
    fn empty_fold_config_is_rejected() {
        let cfg = NoiseConfig::Fold { children: vec![], blend: "xnor".into() };
        assert!(matches!(cfg.build(&BlendRegistry::default()).err(), Some(NoiseError::EmptyFold)));
    }

    #[test]
    fn default_tree_roundtrips_through_json() {
        let cfg = NoiseConfig::xnor_perlin(42);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(NoiseConfig::from_json(&json).unwrap(), cfg);

        let noise = cfg.build(&BlendRegistry::default()).unwrap();
        let v = noise.get(0.3, 0.6);
        assert!((0.0..=1.0).contains(&v));
    }
}
