//! Type-names estándar de artifacts.
//!
//! Un channel sólo puede conectarse a un slot declarado con el mismo
//! type-name, así que estos valores deben coincidir entre el componente que
//! produce y el que consume.

/// Directorio externo con datos crudos (p.ej. CSVs).
pub const EXTERNAL_PATH: &str = "ExternalPath";
/// Ejemplos (splits train/eval) en formato de ingesta.
pub const EXAMPLES: &str = "Examples";
/// Estadísticas calculadas sobre los ejemplos.
pub const EXAMPLE_STATISTICS: &str = "ExampleStatistics";
/// Esquema inferido de los datos.
pub const SCHEMA: &str = "Schema";
/// Anomalías detectadas al validar estadísticas contra el esquema.
pub const EXAMPLE_ANOMALIES: &str = "ExampleAnomalies";
/// Modelo exportado.
pub const MODEL: &str = "Model";
/// Mejores hiperparámetros encontrados por el tuner.
pub const TUNER_RESULTS: &str = "TunerResults";
