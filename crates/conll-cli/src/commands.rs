use std::io;

use anyhow::{Context, Result};
use comfy_table::Table;
use conll_cli::config::resolve_options;
use conll_cli::ingest::collect_inputs;
use conll_cli::pipeline::{ConvertResult, convert_files, convert_to_sink};
use conll_model::{DEFAULT_CONLL2009_ROW_FORMAT, FieldName};
use conll_writer::{FormatBuilder, FormatDescriptor, compile_options};
use tracing::{info, info_span};

use crate::cli::{ConvertArgs, TemplateArgs};
use crate::summary::apply_table_style;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", inputs = args.inputs.len());
    let _guard = span.enter();

    // Configuration problems stop the run before any document is touched.
    let options = resolve_options(args.config.as_deref(), args.overrides())?;
    let descriptor = compile_options(&options).context("compile row format")?;
    info!(
        columns = descriptor.len(),
        header = options.include_header,
        "row format compiled"
    );

    let inputs = collect_inputs(&args.inputs)?;
    info!(documents = inputs.len(), "converting documents");

    let result = if args.stdout {
        convert_to_sink(&inputs, io::stdout().lock(), &options, &descriptor)?
    } else {
        convert_files(&inputs, args.output_dir.as_deref(), &options, &descriptor)
    };
    info!(
        documents = result.documents.len(),
        sentences = result.total_sentences(),
        tokens = result.total_tokens(),
        errors = result.errors.len(),
        "conversion finished"
    );
    Ok(result)
}

pub fn run_fields() -> Result<()> {
    let default = FormatDescriptor::compile(DEFAULT_CONLL2009_ROW_FORMAT, "\t")
        .context("compile default row format")?;
    let mut table = Table::new();
    table.set_header(vec!["Field", "Placeholder", "Header", "Mirror", "Default column"]);
    apply_table_style(&mut table);
    for field in FieldName::ALL {
        let mirror = field
            .mirror()
            .map_or_else(|| "-".to_string(), |partner| partner.to_string());
        let column = default
            .column_index(field)
            .map_or_else(|| "-".to_string(), |idx| (idx + 1).to_string());
        table.add_row(vec![
            field.to_string(),
            field.placeholder(),
            field.header_name(),
            mirror,
            column,
        ]);
    }
    println!("{table}");
    println!("Default row format: {DEFAULT_CONLL2009_ROW_FORMAT}");
    Ok(())
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    let template = args
        .fields
        .iter()
        .fold(FormatBuilder::new(), |builder, field| builder.with_field(*field))
        .build();
    FormatDescriptor::compile(&template, "\t").context("invalid field selection")?;
    println!("{template}");
    Ok(())
}
