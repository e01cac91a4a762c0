//! `validate` command runner.

use anyhow::Context;
use synth_core::Schema;

use crate::SchemaArgs;

/// Load a schema, validate it and print what it contains.
pub fn run_validate(args: &SchemaArgs) -> anyhow::Result<()> {
    let schema = Schema::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;

    tracing::info!("Schema {:?} validated successfully", args.schema);
    print!("{}", summarize(&schema));
    Ok(())
}

/// Human-readable summary of a schema.
pub fn summarize(schema: &Schema) -> String {
    let mut out = format!(
        "{} departments, {} job titles, {} office locations\n",
        schema.departments.len(),
        schema.job_title_count(),
        schema.office_locations.len()
    );

    for department in &schema.departments {
        out.push_str(&format!(
            "  {}: {} titles, salary {}-{}\n",
            department.name,
            department.job_titles.len(),
            department.salary_range.min,
            department.salary_range.max
        ));
    }

    out.push_str(&format!(
        "Names: {} male, {} female, {} last\n",
        schema.male_names.len(),
        schema.female_names.len(),
        schema.last_names.len()
    ));
    out.push_str(&format!(
        "Streets: {}, ethnicities: {}\n",
        schema.street_names.len(),
        schema.ethnicities.len()
    ));
    out
}
