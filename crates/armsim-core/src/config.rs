use serde::{Deserialize, Serialize};

use armsim_chain::component::{ComponentKind, Piston};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_frame_dt() -> f64 {
    1.0 / 60.0
}

// ---------------------------------------------------------------------------
// ComponentSpec
// ---------------------------------------------------------------------------

/// Start-up description of one chain component.
///
/// Mirrors the four component kinds; optional fields carry initial commands
/// applied once the chain is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSpec {
    /// Prismatic actuator with an extension limit.
    Piston {
        max_length: f32,
        #[serde(default)]
        target_length: Option<f32>,
    },
    /// Rate-limited revolute actuator.
    Hinge {
        #[serde(default)]
        target_angle: Option<f32>,
    },
    /// Velocity-controlled revolute actuator.
    Swivel {
        #[serde(default)]
        rotational_speed: Option<f32>,
    },
    /// Rigid segment.
    Link { length: f32 },
}

impl ComponentSpec {
    /// Kind tag for the component this spec describes.
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Piston { .. } => ComponentKind::Piston,
            Self::Hinge { .. } => ComponentKind::Hinge,
            Self::Swivel { .. } => ComponentKind::Swivel,
            Self::Link { .. } => ComponentKind::Link,
        }
    }
}

// ---------------------------------------------------------------------------
// SimConfig
// ---------------------------------------------------------------------------

/// Main simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Frame timestep in seconds (default: 1/60 ≈ 0.0167 = 60 Hz).
    #[serde(default = "default_frame_dt")]
    pub frame_dt: f64,

    /// Chain description, base to tip.
    #[serde(default)]
    pub chain: Vec<ComponentSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_dt: default_frame_dt(),
            chain: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_dt <= 0.0 {
            return Err(ConfigError::InvalidFrameDt(self.frame_dt));
        }
        for (i, spec) in self.chain.iter().enumerate() {
            match spec {
                ComponentSpec::Piston { max_length, .. } => {
                    if *max_length < Piston::MIN_LENGTH {
                        return Err(ConfigError::InvalidValue {
                            field: format!("chain[{i}].max_length"),
                            message: format!("must be >= {}", Piston::MIN_LENGTH),
                        });
                    }
                }
                ComponentSpec::Link { length } => {
                    if *length <= 0.0 {
                        return Err(ConfigError::InvalidValue {
                            field: format!("chain[{i}].length"),
                            message: "must be > 0".into(),
                        });
                    }
                }
                ComponentSpec::Hinge { .. } | ComponentSpec::Swivel { .. } => {}
            }
        }
        Ok(())
    }

    /// Frame rate in Hz.
    pub fn frame_hz(&self) -> f64 {
        1.0 / self.frame_dt
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_config_default_values() {
        let cfg = SimConfig::default();
        assert!((cfg.frame_dt - 1.0 / 60.0).abs() < f64::EPSILON);
        assert!(cfg.chain.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn frame_hz_from_dt() {
        let cfg = SimConfig {
            frame_dt: 0.02,
            ..SimConfig::default()
        };
        assert!((cfg.frame_hz() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_nonpositive_frame_dt() {
        let cfg = SimConfig {
            frame_dt: 0.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::InvalidFrameDt(_)
        ));
    }

    #[test]
    fn validate_rejects_degenerate_piston() {
        let cfg = SimConfig {
            chain: vec![ComponentSpec::Piston {
                max_length: 0.0,
                target_length: None,
            }],
            ..SimConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("chain[0].max_length"));
    }

    #[test]
    fn validate_rejects_zero_length_link() {
        let cfg = SimConfig {
            chain: vec![
                ComponentSpec::Hinge { target_angle: None },
                ComponentSpec::Link { length: 0.0 },
            ],
            ..SimConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("chain[1].length"));
    }

    #[test]
    fn toml_deserialization_full_chain() {
        let toml_str = r#"
            frame_dt = 0.02

            [[chain]]
            hinge = { target_angle = 1.57 }

            [[chain]]
            piston = { max_length = 2.0, target_length = 1.5 }

            [[chain]]
            swivel = { rotational_speed = -2.0 }

            [[chain]]
            link = { length = 0.5 }
        "#;
        let cfg: SimConfig = toml::from_str(toml_str).unwrap();
        assert!((cfg.frame_dt - 0.02).abs() < f64::EPSILON);
        assert_eq!(cfg.chain.len(), 4);
        assert_eq!(
            cfg.chain.iter().map(ComponentSpec::kind).collect::<Vec<_>>(),
            vec![
                ComponentKind::Hinge,
                ComponentKind::Piston,
                ComponentKind::Swivel,
                ComponentKind::Link,
            ]
        );
        let ComponentSpec::Piston {
            max_length,
            target_length,
        } = &cfg.chain[1]
        else {
            panic!("expected piston spec");
        };
        assert!((max_length - 2.0).abs() < f32::EPSILON);
        assert!((target_length.unwrap() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn toml_defaults_applied() {
        let cfg: SimConfig = toml::from_str("").unwrap();
        assert!((cfg.frame_dt - 1.0 / 60.0).abs() < f64::EPSILON);
        assert!(cfg.chain.is_empty());

        let cfg: SimConfig = toml::from_str("[[chain]]\nhinge = {}\n").unwrap();
        assert_eq!(
            cfg.chain,
            vec![ComponentSpec::Hinge { target_angle: None }]
        );
    }

    #[test]
    fn spec_serde_roundtrip() {
        let specs = vec![
            ComponentSpec::Piston {
                max_length: 1.0,
                target_length: Some(0.5),
            },
            ComponentSpec::Swivel {
                rotational_speed: Some(3.0),
            },
            ComponentSpec::Link { length: 2.0 },
        ];
        let cfg = SimConfig {
            chain: specs.clone(),
            ..SimConfig::default()
        };
        let text = toml::to_string(&cfg).unwrap();
        let parsed: SimConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.chain, specs);
    }

    #[test]
    fn from_file_roundtrip() {
        let dir = std::env::temp_dir().join("armsim_test_sim_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("chain.toml");
        std::fs::write(
            &path,
            r#"
            frame_dt = 0.01

            [[chain]]
            link = { length = 1.0 }
        "#,
        )
        .unwrap();

        let cfg = SimConfig::from_file(&path).unwrap();
        assert!((cfg.frame_dt - 0.01).abs() < f64::EPSILON);
        assert_eq!(cfg.chain.len(), 1);

        // Cleanup
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn from_file_rejects_invalid_config() {
        let dir = std::env::temp_dir().join("armsim_test_sim_config_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "frame_dt = -1.0\n").unwrap();

        assert!(SimConfig::from_file(&path).is_err());

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn from_file_not_found() {
        assert!(SimConfig::from_file("/nonexistent/armsim/chain.toml").is_err());
    }
}
