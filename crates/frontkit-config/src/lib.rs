//! Build configuration derivation for the frontend bundle.
//!
//! Three axis flags (production, latest target, stats) and a flavor (app or
//! demo) select one [`BuildConfiguration`]: entry points, plugin pipeline,
//! compile-time constants and output routing, ready to hand to a bundling
//! engine as JSON.
//!
//! ```
//! use frontkit_config::{Axes, Flavor, ProjectPaths, StaticVersion};
//!
//! let paths = ProjectPaths::from_root("/repo");
//! let config = Flavor::App
//!     .build(Axes::new(true, true, false), &paths, &StaticVersion::new("20200407.2"))
//!     .unwrap();
//! assert!(config.output_dir().ends_with("frontend_latest"));
//! ```

pub mod axes;
pub mod define;
pub mod entry;
pub mod env;
pub mod error;
pub mod factory;
pub mod flavor;
pub mod paths;
pub mod pipeline;
pub mod validation;

// Re-export main types
pub use axes::{Axes, BuildMode, BuildTarget};
pub use define::{DefineTable, DefineValue, REQUIRED_DEFINES};
pub use entry::EntryPoints;
pub use env::{SetupPyVersion, StaticVersion, VersionProvider};
pub use error::{ConfigError, Result};
pub use factory::{
    BuildConfiguration, ChunkGroups, ConfigRequest, InputOptions, ModuleFormat, OutputOptions,
    create,
};
pub use flavor::{APP_ENTRIES, Flavor, app_config, demo_config};
pub use paths::{PathRegistry, ProjectPaths};
pub use pipeline::{ModuleRecord, Pipeline, PipelineStage, Stage, StagePhase, assemble};

// Re-export validation
pub use validation::{
    ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_roots, validate_schema,
};
