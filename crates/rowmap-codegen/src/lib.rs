pub mod exec;
mod expand;
pub mod plan;

use plan::MappingUnit;
use rowmap_core::schema::{self, SchemaRegistry};
use rowmap_core::{
    err, DeclarationSource, Diagnostic, DiagnosticSink, EmissionSink, Error, GeneratedFile, Result,
    Site,
};

use std::collections::HashSet;

const HEADER: &str = "// @generated by rowmap; do not edit\n";

/// Code generation options
#[derive(Debug, Clone)]
pub struct Options {
    /// Path generated code imports the mapper runtime from
    pub support_path: String,

    /// Name of the batch module. Units are written to `<module>/<unit>.rs`
    /// and the aggregate to `<module>.rs`.
    pub module: String,
}

/// The result of a successful batch.
#[derive(Debug)]
pub struct Output {
    pub registry: SchemaRegistry,

    /// One unit per emitted record, in source order
    pub units: Vec<MappingUnit>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            support_path: "rowmap::codegen_support".to_string(),
            module: "mappers".to_string(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn support_path(mut self, support_path: impl Into<String>) -> Self {
        self.support_path = support_path.into();
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }
}

/// Resolves every record and checks every foreign key without emitting.
pub fn check(
    source: &dyn DeclarationSource,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<SchemaRegistry> {
    let registry = resolve(source, diagnostics)?;

    let errs: Vec<_> = registry
        .records()
        .flat_map(|schema| registry.verify_foreign_keys(schema))
        .collect();

    for err in &errs {
        report(diagnostics, err);
    }

    match errs.into_iter().next() {
        Some(first) => Err(first.context(err!("declarations have unresolved foreign keys"))),
        None => Ok(registry),
    }
}

/// Runs one batch: resolves every record, then emits one mapping unit per
/// record plus the batch aggregate.
///
/// Declaration and validation errors stop the batch before anything is
/// emitted. A record whose foreign keys cannot be resolved, or whose unit
/// cannot be generated, is skipped; the remaining records are still emitted
/// and the batch returns an error.
pub fn generate(
    source: &dyn DeclarationSource,
    options: &Options,
    diagnostics: &mut dyn DiagnosticSink,
    emitter: &mut dyn EmissionSink,
) -> Result<Output> {
    let registry = resolve(source, diagnostics)?;

    let mut units = vec![];
    let mut modules = HashSet::new();
    let mut failed = vec![];

    for schema in registry.records() {
        let errs = registry.verify_foreign_keys(schema);
        if !errs.is_empty() {
            for err in &errs {
                report(diagnostics, err);
            }
            failed.extend(errs);
            continue;
        }

        let unit = match emit_unit(&registry, schema, options, &mut modules, emitter) {
            Ok(unit) => unit,
            Err(err) => {
                report(diagnostics, &err);
                failed.push(err);
                continue;
            }
        };

        tracing::debug!(record = %unit.record, module = %unit.module, "emitted mapping unit");
        units.push(unit);
    }

    let aggregate = expand::mappers(&units, options)?;
    emit(
        emitter,
        None,
        format!("{}.rs", options.module),
        aggregate.to_string(),
    )?;

    tracing::info!(
        emitted = units.len(),
        failed = failed.len(),
        "finished batch"
    );

    match failed.into_iter().next() {
        Some(first) => Err(first.context(err!(
            "{} of {} records could not be emitted",
            registry.len() - units.len(),
            registry.len()
        ))),
        None => Ok(Output { registry, units }),
    }
}

/// Builds and registers every record of the batch, reporting each error.
fn resolve(
    source: &dyn DeclarationSource,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<SchemaRegistry> {
    let mut registry = SchemaRegistry::new();
    let mut fatal = vec![];

    for decl in source.records() {
        let registered = schema::build(source, decl)
            .and_then(|schema| registry.register(schema).map_err(Into::into));

        if let Err(errs) = registered {
            for err in errs {
                report(diagnostics, &err);
                if err.is_batch_fatal() {
                    fatal.push(err);
                }
            }
        }
    }

    let count = fatal.len();
    match fatal.into_iter().next() {
        Some(first) => Err(first.context(err!(
            "{count} declaration error(s); no mappers emitted"
        ))),
        None => {
            tracing::debug!(records = registry.len(), "resolved batch");
            Ok(registry)
        }
    }
}

fn emit_unit(
    registry: &SchemaRegistry,
    schema: &schema::RecordSchema,
    options: &Options,
    modules: &mut HashSet<String>,
    emitter: &mut dyn EmissionSink,
) -> Result<MappingUnit> {
    let site = Site::record(schema.id.as_str());
    let unit = MappingUnit::build(schema, registry)?;

    if !modules.insert(unit.module.clone()) {
        return Err(Error::codegen(
            site,
            format!(
                "module `{}` is already generated for another record",
                unit.module
            ),
        ));
    }

    let tokens = expand::unit(&unit, options)?;
    emit(
        emitter,
        Some(site),
        format!("{}/{}.rs", options.module, unit.module),
        tokens.to_string(),
    )?;

    Ok(unit)
}

fn emit(
    emitter: &mut dyn EmissionSink,
    site: Option<Site>,
    name: String,
    contents: String,
) -> Result<()> {
    let file = GeneratedFile {
        contents: format!("{HEADER}{contents}\n"),
        name: name.clone(),
    };

    emitter
        .emit(file)
        .map_err(|err| Error::emission_io(site, name, err))
}

fn report(diagnostics: &mut dyn DiagnosticSink, err: &Error) {
    tracing::warn!(site = ?err.site(), "{}", err.message());
    diagnostics.report(Diagnostic::from(err));
}
