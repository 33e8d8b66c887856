//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y construye un `AppConfig` inmutable
//! con las opciones de validación y las rutas del pipeline de demo.
use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use pipespec_core::ValidationOptions;
use serde::Serialize;

use crate::errors::AppError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub validation: ValidationOptions,
    pub pipeline: PipelineConfig,
}

/// Rutas del pipeline iris usadas por `main-core`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineConfig {
    pub pipeline_name: String,
    pub pipeline_root: String,
    pub data_root: String,
    pub module_file: String,
}

impl AppConfig {
    /// Construye la configuración a partir de un lookup de variables.
    /// Las rutas ausentes se derivan de `HOME` (o `.` si no está definido).
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let strict_arguments = match lookup("PIPESPEC_STRICT_ARGUMENTS") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| AppError::Config(format!("PIPESPEC_STRICT_ARGUMENTS inválido: '{raw}'")))?,
        };

        let pipeline_name = "iris".to_string();
        let home = lookup("HOME").unwrap_or_else(|| ".".to_string());
        let iris_root = format!("{home}/iris");
        let pipeline_root = lookup("PIPESPEC_PIPELINE_ROOT").unwrap_or_else(|| format!("{home}/tfx/pipelines/{pipeline_name}"));
        let data_root = lookup("PIPESPEC_DATA_ROOT").unwrap_or_else(|| format!("{iris_root}/data"));
        let module_file = lookup("PIPESPEC_MODULE_FILE").unwrap_or_else(|| format!("{iris_root}/iris_utils.py"));

        Ok(Self { validation: ValidationOptions { strict_arguments },
                  pipeline: PipelineConfig { pipeline_name,
                                             pipeline_root,
                                             data_root,
                                             module_file } })
    }

    /// Lee la configuración del entorno del proceso (tras cargar `.env`).
    pub fn from_env() -> Result<Self, AppError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_vars(|key| env::var(key).ok())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_derive_from_home() {
        let cfg = AppConfig::from_vars(vars(&[("HOME", "/home/ana")])).unwrap();
        assert!(cfg.validation.strict_arguments);
        assert_eq!(cfg.pipeline.pipeline_root, "/home/ana/tfx/pipelines/iris");
        assert_eq!(cfg.pipeline.data_root, "/home/ana/iris/data");
        assert_eq!(cfg.pipeline.module_file, "/home/ana/iris/iris_utils.py");
    }

    #[test]
    fn explicit_vars_override_defaults() {
        let cfg = AppConfig::from_vars(vars(&[("PIPESPEC_STRICT_ARGUMENTS", "false"),
                                              ("PIPESPEC_DATA_ROOT", "/srv/iris"),
                                              ("PIPESPEC_MODULE_FILE", "/srv/utils.py")])).unwrap();
        assert!(!cfg.validation.strict_arguments);
        assert_eq!(cfg.pipeline.data_root, "/srv/iris");
        assert_eq!(cfg.pipeline.module_file, "/srv/utils.py");
        assert_eq!(cfg.pipeline.pipeline_root, "./tfx/pipelines/iris");
    }

    #[test]
    fn invalid_strict_flag_is_a_config_error() {
        let err = AppConfig::from_vars(vars(&[("PIPESPEC_STRICT_ARGUMENTS", "quizás")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
