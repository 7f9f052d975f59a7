use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use geolog::api::{CmdMessage, GeologApi, MessageLevel};
use geolog::error::{GeologError, Result};
use geolog::model::SampleFields;
use geolog::render::DisplayRow;
use geolog::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

mod args;
use args::{Cli, Commands, FieldArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut api, fields),
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut api, &id, fields),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut api, &id, yes),
        Some(Commands::Clear { yes }) => handle_clear(&mut api, yes),
        Some(Commands::Export { output }) => handle_export(&api, output),
        Some(Commands::Import { file }) => handle_import(&mut api, &file),
        Some(Commands::Map { id }) => handle_map(&api, &id),
    }
}

fn init_api(cli: &Cli) -> Result<GeologApi<FileStore>> {
    let root = match &cli.dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "geolog", "geolog")
            .ok_or_else(|| GeologError::Store("Could not determine a data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    Ok(GeologApi::new(FileStore::new(root)))
}

fn handle_add(api: &mut GeologApi<FileStore>, fields: FieldArgs) -> Result<()> {
    let result = api.create_sample(to_fields(fields, SampleFields::default()))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &GeologApi<FileStore>) -> Result<()> {
    let result = api.list_samples()?;
    print_messages(&result.messages);
    print_rows(&result.rows);
    Ok(())
}

fn handle_edit(api: &mut GeologApi<FileStore>, id: &str, fields: FieldArgs) -> Result<()> {
    let id = resolve_id(api, id)?;
    let mut session = api.edit_sample(id)?;
    session.fields = to_fields(fields, session.fields.clone());
    let result = api.commit_edit(&session)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut GeologApi<FileStore>, id: &str, yes: bool) -> Result<()> {
    let id = resolve_id(api, id)?;
    if !yes && !confirm(&format!("Delete sample {}?", short_id(id)))? {
        println!("Operation cancelled.");
        return Ok(());
    }
    let result = api.delete_sample(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(api: &mut GeologApi<FileStore>, yes: bool) -> Result<()> {
    let count = api.list_samples()?.rows.len();
    if count == 0 {
        println!("No samples recorded.");
        return Ok(());
    }
    if !yes && !confirm(&format!("Delete ALL {} sample(s)?", count))? {
        println!("Operation cancelled.");
        return Ok(());
    }
    let result = api.clear_samples()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(api: &GeologApi<FileStore>, output: Option<PathBuf>) -> Result<()> {
    let result = api.export_samples()?;
    print_messages(&result.messages);

    if let Some(text) = &result.export {
        let path = output.unwrap_or_else(|| {
            PathBuf::from(format!("geolog-{}.csv", Utc::now().format("%Y-%m-%d")))
        });
        std::fs::write(&path, text).map_err(GeologError::Io)?;
        println!("{}", format!("Written to {}", path.display()).green());
    }
    Ok(())
}

fn handle_import(api: &mut GeologApi<FileStore>, file: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(file).map_err(GeologError::Io)?;
    let result = api.import_samples(&text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_map(api: &GeologApi<FileStore>, id: &str) -> Result<()> {
    let id = resolve_id(api, id)?;
    match api.map_url(id)? {
        Some(url) => println!("{}", url),
        None => println!("{}", "Not enough location data to build a map link.".dimmed()),
    }
    Ok(())
}

/// Merge CLI flags over a base field set: a provided flag replaces the base
/// value, an absent one keeps it.
fn to_fields(args: FieldArgs, base: SampleFields) -> SampleFields {
    SampleFields {
        sample_number: args.sample_number.unwrap_or(base.sample_number),
        collector: args.collector.unwrap_or(base.collector),
        locality: args.locality.unwrap_or(base.locality),
        country: args.country.unwrap_or(base.country),
        mineralogy: args.mineralogy.unwrap_or(base.mineralogy),
        paleontology: args.paleontology.unwrap_or(base.paleontology),
        latitude: args.latitude.unwrap_or(base.latitude),
        longitude: args.longitude.unwrap_or(base.longitude),
    }
}

/// Accept a full uuid or a unique prefix of one.
fn resolve_id(api: &GeologApi<FileStore>, input: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let rows = api.list_samples()?.rows;
    let matches: Vec<Uuid> = rows
        .iter()
        .map(|r| r.id)
        .filter(|id| id.to_string().starts_with(input))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(GeologError::Api(format!("No sample with id '{}'", input))),
        _ => Err(GeologError::Api(format!(
            "Id prefix '{}' is ambiguous ({} matches)",
            input,
            matches.len()
        ))),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [Y] to confirm: ", prompt);
    io::stdout().flush().map_err(GeologError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(GeologError::Io)?;
    Ok(input.trim() == "Y")
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const CELL_WIDTH: usize = 18;

fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

fn print_rows(rows: &[DisplayRow]) {
    if rows.is_empty() {
        println!("No samples recorded.");
        return;
    }

    let headers = [
        "id", "number", "collector", "locality", "country", "mineralogy", "paleontology", "lat",
        "lon",
    ];
    let table: Vec<[String; 9]> = rows
        .iter()
        .map(|r| {
            [
                short_id(r.id),
                r.sample_number.clone(),
                r.collector.clone(),
                r.locality.clone(),
                r.country.clone(),
                r.mineralogy.clone(),
                r.paleontology.clone(),
                r.latitude.clone(),
                r.longitude.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &table {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(flatten(cell).width().min(CELL_WIDTH));
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect();
    println!("{}", header_line.join("  ").bold());

    for row in &table {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(&truncate_to_width(&flatten(cell), CELL_WIDTH), widths[i]))
            .collect();
        println!("{}", line.join("  "));
    }
}

/// Multi-line cells become single-line for the table.
fn flatten(cell: &str) -> String {
    cell.chars().map(|c| if c == '\n' { ' ' } else { c }).collect()
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
