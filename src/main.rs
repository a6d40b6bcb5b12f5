use clap::Parser;
use docxstyle::{Error, ParagraphStyle, StyleValue, TabStop, twips_to_pts};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docxstyle",
    about = "Inspect DOCX paragraph styles or build one from a style map"
)]
struct Args {
    /// Input DOCX file; without one, a style is built from --set/--tab
    input: Option<PathBuf>,
    /// Only show the style with this id
    #[arg(long)]
    style: Option<String>,
    /// Style map entry, e.g. --set align=justify --set line-height=1.5
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Tab stop as kind:position[:leader], e.g. --tab decimal:4320:dot
    #[arg(long = "tab", value_name = "TAB")]
    tabs: Vec<String>,
}

fn describe(style: &ParagraphStyle) {
    let twips = |label: &str, v: Option<i32>| {
        if let Some(v) = v {
            println!("  {label:<18}{v} twips ({}pt)", twips_to_pts(v));
        }
    };

    println!("  {:<18}{}", "basedOn", style.based_on());
    if let Some(next) = style.next() {
        println!("  {:<18}{next}", "next");
    }
    if let Some(align) = style.align() {
        println!("  {:<18}{align}", "align");
    }
    if let Some(lh) = style.line_height() {
        println!("  {:<18}{lh}", "lineHeight");
    }
    twips("spacing", style.spacing());
    twips("spaceBefore", style.space_before());
    twips("spaceAfter", style.space_after());
    twips("indent", style.indent());
    twips("hanging", style.hanging());
    if let Some(tabs) = style.tabs() {
        let stops: Vec<String> = tabs.iter().map(ToString::to_string).collect();
        println!("  {:<18}{}", "tabs", stops.join(", "));
    }
    println!("  {:<18}{}", "widowControl", style.widow_control());
    println!("  {:<18}{}", "keepNext", style.keep_next());
    println!("  {:<18}{}", "keepLines", style.keep_lines());
    println!("  {:<18}{}", "pageBreakBefore", style.page_break_before());
}

fn build_from_map(args: &Args) -> Result<ParagraphStyle, Error> {
    let mut map: Vec<(String, StyleValue)> = Vec::with_capacity(args.set.len() + 1);
    for entry in &args.set {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| Error::InvalidStyleValue(format!("expected KEY=VALUE, got '{entry}'")))?;
        map.push((key.trim().to_string(), StyleValue::parse_cli(value.trim())));
    }
    if !args.tabs.is_empty() {
        let stops = args
            .tabs
            .iter()
            .map(|t| t.parse::<TabStop>())
            .collect::<Result<Vec<_>, _>>()?;
        map.push(("tabs".to_string(), StyleValue::Tabs(stops)));
    }
    ParagraphStyle::from_style_map(map)
}

fn run(args: &Args) -> Result<(), Error> {
    let Some(input) = &args.input else {
        let style = build_from_map(args)?;
        println!("paragraph style");
        describe(&style);
        return Ok(());
    };

    let definitions = docxstyle::read_paragraph_styles(input)?;
    let mut shown = 0;
    for def in definitions
        .iter()
        .filter(|d| args.style.as_deref().is_none_or(|id| d.style_id == id))
    {
        match &def.name {
            Some(name) => println!("{} ({name})", def.style_id),
            None => println!("{}", def.style_id),
        }
        describe(&def.style);
        shown += 1;
    }
    if shown == 0 {
        if let Some(id) = &args.style {
            return Err(Error::InvalidDocx(format!("no paragraph style '{id}'")));
        }
        log::info!("{} defines no paragraph styles", input.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(input) = &args.input {
        if !input.exists() {
            eprintln!("Error: file not found: {}", input.display());
            std::process::exit(1);
        }
        if !input.is_file() {
            eprintln!("Error: not a file: {}", input.display());
            std::process::exit(1);
        }
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
