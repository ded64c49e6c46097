use anyhow::{Result, bail};
use crossterm::terminal;
use tracing::debug;

use crate::{
    app::AppContext,
    cli::args::{Cli, Command, IdeaFields},
    db::Db,
    domain::{
        idea::{Idea, IdeaId, Status},
        tags::parse_tags,
    },
    format,
    store::IdeaStore,
};

pub(crate) fn dispatch(app: &mut AppContext, cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Add { title, fields }) => add_idea(app, &title, fields),
        Some(Command::List { status }) => list_ideas(app, status),
        Some(Command::Show { id }) => show_idea(app, &id),
        Some(Command::Edit { id, title, fields }) => edit_idea(app, &id, title, fields),
        Some(Command::Advance { id }) => advance_idea(app, &id),
        Some(Command::Rm { at, .. }) if !at.is_empty() => delete_positions(app, &at),
        Some(Command::Rm { ids, .. }) => delete_ideas(app, &ids),
        Some(Command::Board) => print_board(app),
        Some(Command::Version) => {
            println!("clipnest {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => match cli.title {
            Some(title) => add_idea(app, &title, IdeaFields::default()),
            None => print_board(app),
        },
    }
}

fn add_idea(app: &mut AppContext, title: &str, fields: IdeaFields) -> Result<()> {
    let title = required_title(title)?;
    let mut idea = Idea::new(title).with_status(fields.status.unwrap_or_default());
    if let Some(description) = fields.description {
        idea = idea.with_description(description);
    }
    if let Some(tags) = fields.tags.as_deref() {
        idea = idea.with_tags(parse_tags(tags));
    }

    let id = idea.id;
    app.store_mut().add(idea)?;
    println!("Added {}", id.short());
    Ok(())
}

fn list_ideas(app: &AppContext, status: Option<Status>) -> Result<()> {
    let width = terminal_width();
    for (index, idea) in app.store().all().iter().enumerate() {
        if status.is_some_and(|wanted| wanted != idea.status) {
            continue;
        }
        println!("{}", format::format_idea_line(index + 1, idea, width));
    }
    Ok(())
}

fn show_idea(app: &AppContext, id: &str) -> Result<()> {
    let idea = resolve_idea(app.store(), id)?;
    println!("{}", format::format_idea_detail(&idea));
    Ok(())
}

fn edit_idea(
    app: &mut AppContext,
    id: &str,
    title: Option<String>,
    fields: IdeaFields,
) -> Result<()> {
    let existing = resolve_idea(app.store(), id)?;
    let title = match title {
        Some(title) => required_title(&title)?.to_string(),
        None => existing.title.clone(),
    };
    let tags = match fields.tags.as_deref() {
        Some(tags) => parse_tags(tags),
        None => existing.tags.clone(),
    };
    let edited = Idea::new(title)
        .with_id(existing.id)
        .with_date_created(existing.date_created)
        .with_description(
            fields
                .description
                .unwrap_or_else(|| existing.description.clone()),
        )
        .with_tags(tags)
        .with_status(fields.status.unwrap_or(existing.status));

    if edited == existing {
        println!("Nothing to change");
        return Ok(());
    }
    app.store_mut().update(edited)?;
    println!("Updated {}", existing.id.short());
    Ok(())
}

fn advance_idea(app: &mut AppContext, id: &str) -> Result<()> {
    let idea = resolve_idea(app.store(), id)?;
    let Some(next) = idea.status.next() else {
        bail!("'{}' is already {}", idea.title, idea.status.label());
    };
    let title = idea.title.clone();
    app.store_mut().update(idea.with_status(next))?;
    println!("{} -> {}", title, next.label());
    Ok(())
}

fn delete_ideas(app: &mut AppContext, ids: &[String]) -> Result<()> {
    let targets = ids
        .iter()
        .map(|id| resolve_idea(app.store(), id).map(|idea| idea.id))
        .collect::<Result<Vec<IdeaId>>>()?;

    let mut removed = 0;
    for id in targets {
        removed += app.store_mut().delete(id)?;
    }
    println!("Deleted {}", plural(removed));
    Ok(())
}

/// `positions` are the 1-based numbers printed by `list`.
fn delete_positions(app: &mut AppContext, positions: &[usize]) -> Result<()> {
    let len = app.store().len();
    if let Some(bad) = positions.iter().find(|&&pos| pos == 0 || pos > len) {
        bail!("no idea at position {bad} (have {len})");
    }
    let removed = app
        .store_mut()
        .delete_at(positions.iter().map(|pos| pos - 1))?;
    println!("Deleted {}", plural(removed));
    Ok(())
}

fn print_board(app: &AppContext) -> Result<()> {
    let store = app.store();
    if store.is_empty() {
        println!("No ideas yet. Add one with `clipnest add <title>`.");
        return Ok(());
    }

    let width = terminal_width();
    let all = store.all();
    for (status, count) in store.counts() {
        println!("{} ({})", status.label(), count);
        for idea in store.query(status) {
            let position = all
                .iter()
                .position(|candidate| candidate.id == idea.id)
                .map_or(0, |index| index + 1);
            println!("{}", format::format_idea_line(position, &idea, width));
        }
        println!();
    }
    Ok(())
}

fn resolve_idea(store: &IdeaStore<Db>, text: &str) -> Result<Idea> {
    if let Ok(id) = IdeaId::parse(text) {
        if let Some(idea) = store.get(id) {
            return Ok(idea);
        }
    }
    let mut matches = store.find_by_prefix(text);
    debug!(query = text, matches = matches.len(), "resolving idea id");
    match matches.len() {
        0 => bail!("no idea matches '{text}'"),
        1 => Ok(matches.remove(0)),
        n => bail!("'{text}' matches {n} ideas, use a longer id"),
    }
}

fn required_title(title: &str) -> Result<&str> {
    let title = title.trim();
    if title.is_empty() {
        bail!("title is required");
    }
    Ok(title)
}

const FALLBACK_WIDTH: usize = 80;

fn terminal_width() -> usize {
    usable_width(terminal::size().ok())
}

/// Some ptys report zero columns; treat that like an unknown size.
fn usable_width(size: Option<(u16, u16)>) -> usize {
    match size {
        Some((width, _)) if width > 0 => width as usize,
        _ => FALLBACK_WIDTH,
    }
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 idea".to_string()
    } else {
        format!("{count} ideas")
    }
}
