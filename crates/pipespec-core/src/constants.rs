//! Constantes del validador de specs.
//!
//! Agrupa valores estáticos que participan en el fingerprint de instancias y
//! en el formato textual de los runtime parameters. Cambiarlos invalida
//! fingerprints y placeholders previamente emitidos.

/// Versión lógica del formato de `SpecInstance::to_json`. Se incluye en el
/// input del fingerprint para que un cambio de formato produzca hashes
/// distintos aunque los argumentos sean iguales.
pub const SPEC_FORMAT_VERSION: &str = "S1.0";

/// Prefijo del placeholder textual de un `RuntimeParameter`.
pub const RUNTIME_PLACEHOLDER_PREFIX: &str = "{{pipespec.runtime:";

/// Sufijo del placeholder textual de un `RuntimeParameter`.
pub const RUNTIME_PLACEHOLDER_SUFFIX: &str = "}}";
