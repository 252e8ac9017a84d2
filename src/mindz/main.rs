use arbor::{GlyphSet, RenderOptions, Style, Tree};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use mindz::api::MindzApi;
use mindz::commands::config::ConfigAction;
use mindz::commands::export::ExportFormat;
use mindz::commands::{CmdMessage, MessageLevel, MindzPaths};
use mindz::config::MindzConfig;
use mindz::editor::edit_text;
use mindz::error::{MindzError, Result};
use mindz::model::{Node, Scope};
use mindz::outline::{DisplayNode, NodeSelector};
use mindz::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, FormatArg};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MindzApi<FileStore>,
    scope: Scope,
    new_topic_text: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Show { flat, ascii }) => handle_show(&ctx, flat, ascii),
        Some(Commands::Add { parent, text }) => handle_add(&mut ctx, parent, text),
        Some(Commands::Delete { nodes }) => handle_delete(&mut ctx, nodes),
        Some(Commands::Rename { node, text }) => handle_rename(&mut ctx, node, text),
        Some(Commands::Export { output, format }) => handle_export(&ctx, output, format),
        Some(Commands::Import { path, into, force }) => handle_import(&mut ctx, path, into, force),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_show(&ctx, false, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_mindz_dir = cwd.join(".mindz");

    let proj_dirs =
        ProjectDirs::from("com", "mindz", "mindz").expect("Could not determine config dir");
    let global_data_dir = proj_dirs.data_dir().to_path_buf();

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_mindz_dir,
        Scope::Global => &global_data_dir,
    };
    let config = MindzConfig::load(config_dir).unwrap_or_default();
    let new_topic_text = config.get_new_topic_text().to_string();

    let store = FileStore::new(Some(project_mindz_dir.clone()), global_data_dir.clone());
    let paths = MindzPaths {
        project: Some(project_mindz_dir),
        global: global_data_dir,
    };
    let api = MindzApi::new(store, paths);

    Ok(AppContext {
        api,
        scope,
        new_topic_text,
    })
}

fn handle_show(ctx: &AppContext, flat: bool, ascii: bool) -> Result<()> {
    let result = ctx.api.show(ctx.scope)?;
    if flat {
        print_outline(&result.listed_nodes);
    } else if let Some(tree) = &result.tree {
        print_tree(tree, ascii);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, parent: String, text: Option<String>) -> Result<()> {
    let text = text.unwrap_or_else(|| ctx.new_topic_text.clone());
    let result = ctx.api.add_child(ctx.scope, &parent, text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, nodes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_node(ctx.scope, &nodes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, node: String, text: Option<String>) -> Result<()> {
    let final_text = match text {
        Some(text) => text,
        None => {
            // Seed the editor buffer with the topic's current text.
            let shown = ctx.api.show(ctx.scope)?;
            let tree = shown
                .tree
                .as_ref()
                .ok_or_else(|| MindzError::Api("No map loaded".to_string()))?;
            let selector: NodeSelector = node.parse().map_err(MindzError::Selector)?;
            let current = mindz::outline::resolve(tree, &selector).map_err(MindzError::Selector)?;

            match edit_text(&current.text)? {
                Some(text) => text,
                None => {
                    println!("{}", "Edit cancelled; topic unchanged.".dimmed());
                    return Ok(());
                }
            }
        }
    };

    let result = ctx.api.update_text(ctx.scope, &node, final_text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
) -> Result<()> {
    let format = format.map(|f| match f {
        FormatArg::Md => ExportFormat::Markdown,
        FormatArg::Json => ExportFormat::Json,
    });
    let result = ctx.api.export_map(ctx.scope, format, output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(
    ctx: &mut AppContext,
    path: PathBuf,
    into: Option<String>,
    force: bool,
) -> Result<()> {
    let result = ctx
        .api
        .import_map(ctx.scope, &path, into.as_deref(), force)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.map_path(ctx.scope)?;
    for path in &result.map_paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("new-text"), None) => ConfigAction::ShowKey("new-text".to_string()),
        (Some("new-text"), Some(v)) => ConfigAction::SetNewTopicText(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        println!("new-text = {}", config.get_new_topic_text());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
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

const LINE_WIDTH: usize = 100;

fn print_tree(tree: &Node, ascii: bool) {
    let mut options = RenderOptions::new()
        .connector_style(Style::new().dim())
        .max_label_width(LINE_WIDTH);
    if ascii {
        options = options.glyphs(GlyphSet::ASCII);
    }
    print!("{}", to_arbor(tree, true).render(&options));
}

fn to_arbor(node: &Node, is_root: bool) -> Tree<String> {
    let mut rendered = Tree::new(node.text.clone());
    if is_root {
        rendered = rendered.with_style(Style::new().bold());
    }
    for child in &node.children {
        rendered.push(to_arbor(child, false));
    }
    rendered
}

fn print_outline(nodes: &[DisplayNode]) {
    let path_width = nodes
        .iter()
        .map(|dn| dn.path.to_string().width())
        .max()
        .unwrap_or(0)
        + 2;

    for dn in nodes {
        let path_str = dn.path.to_string();
        let padding = " ".repeat(path_width.saturating_sub(path_str.width()));
        let text = truncate_to_width(&dn.text, LINE_WIDTH.saturating_sub(path_width));

        if dn.path.is_root() {
            println!("{}{}{}", path_str.dimmed(), padding, text.bold());
        } else {
            println!("{}{}{}", path_str.dimmed(), padding, text);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

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
